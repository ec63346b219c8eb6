/// User motion preference, read once at mount from the host environment.
///
/// `Reduced` switches every renderer onto its static code path: no frame
/// stepping, no interval triggers, no pointer-driven movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

impl Motion {
    #[inline]
    pub fn is_reduced(self) -> bool {
        matches!(self, Motion::Reduced)
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Full
    }
}
