//! Mounts the hero scroll choreography: ambient card drift, the pinned
//! three-phase scroll interpolation, and the one-shot transfer of the cards
//! into the team grid.

use std::cell::RefCell;
use std::rc::Rc;

use ambient_core::constants::PIN_FRACTION_HERO;
use ambient_core::scroll::{hero_elements, ScrollPhase};
use ambient_core::ScrollChoreographer;
use instant::Instant;
use web_sys as web;

use crate::dom;
use crate::frame;
use crate::teardown::{listen, Teardown};

pub const HERO_ID: &str = "hero";
pub const CARD_IDS: [&str; 2] = ["hero-card-1", "hero-card-2"];
pub const TEAM_GRID_ID: &str = "team-grid";

struct HeroParts {
    hero: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    team_grid: web::HtmlElement,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Option<Teardown>> {
    let Some(hero) = dom::html_element_by_id(document, HERO_ID) else {
        return Ok(None);
    };
    let cards: Vec<web::HtmlElement> = CARD_IDS
        .iter()
        .filter_map(|id| dom::html_element_by_id(document, id))
        .collect();
    let Some(team_grid) = dom::html_element_by_id(document, TEAM_GRID_ID) else {
        return Ok(None);
    };
    if cards.len() != CARD_IDS.len() {
        return Ok(None);
    }

    let motion = dom::prefers_reduced_motion();
    let parts = Rc::new(HeroParts {
        hero,
        cards,
        team_grid,
    });
    let choreographer = Rc::new(RefCell::new(ScrollChoreographer::new(
        hero_elements(),
        PIN_FRACTION_HERO,
        dom::viewport_height(),
        motion,
    )));
    let mut teardown = Teardown::new();

    if motion.is_reduced() {
        // No pin, no drift: cards go straight to the team grid at full size.
        apply_transforms(&parts, &choreographer.borrow());
        if choreographer.borrow_mut().take_release() {
            release_cards(&parts);
        }
        return Ok(Some(teardown));
    }

    if let Some(window) = web::window() {
        let parts_s = parts.clone();
        let choreographer_s = choreographer.clone();
        listen(
            window.as_ref(),
            "scroll",
            move || {
                let offset = dom::scroll_y() - parts_s.hero.offset_top() as f32;
                let mut ch = choreographer_s.borrow_mut();
                ch.on_scroll(offset);
                apply_transforms(&parts_s, &ch);
                if ch.take_release() {
                    release_cards(&parts_s);
                }
            },
            &mut teardown,
        );

        let choreographer_r = choreographer.clone();
        listen(
            window.as_ref(),
            "resize",
            move || {
                choreographer_r
                    .borrow_mut()
                    .set_viewport_height(dom::viewport_height());
            },
            &mut teardown,
        );
    }

    // The drift runs on the frame clock until the pin cancels it.
    let handle = frame::start_loop({
        let parts = parts.clone();
        let choreographer = choreographer.clone();
        let mut last = Instant::now();
        move || {
            let now = Instant::now();
            let dt = now - last;
            last = now;

            let mut ch = choreographer.borrow_mut();
            ch.tick(dt);
            if ch.phase() == ScrollPhase::Idle {
                apply_transforms(&parts, &ch);
            }
        }
    });
    teardown.defer(move || handle.cancel());
    log::info!("[mount] hero choreography running");
    Ok(Some(teardown))
}

fn apply_transforms(parts: &HeroParts, choreographer: &ScrollChoreographer) {
    for (card, transform) in parts.cards.iter().zip(choreographer.transforms().iter()) {
        let style = card.style();
        _ = style.set_property(
            "transform",
            &format!(
                "translate({}px, {}px) rotate({}deg) scale({})",
                transform.translation.x,
                transform.translation.y,
                transform.rotation_deg,
                transform.scale
            ),
        );
        _ = style.set_property("z-index", &transform.z_index.to_string());
    }
    _ = parts.hero.style().set_property(
        "transform",
        &format!("translateY({}px)", choreographer.container_offset_y()),
    );
}

/// One-shot ownership transfer: move the card elements into the team grid and
/// swap their role class. The choreographer guarantees this runs once.
fn release_cards(parts: &HeroParts) {
    for card in &parts.cards {
        if let Err(e) = parts.team_grid.append_child(card) {
            log::warn!("[hero] re-parent failed: {e:?}");
            continue;
        }
        _ = card.class_list().add_1("team-card-clone");
        _ = card.class_list().remove_1("card-wrapper");
        _ = card.style().set_property("will-change", "auto");
    }
    log::info!("[hero] cards transferred to the team grid");
}
