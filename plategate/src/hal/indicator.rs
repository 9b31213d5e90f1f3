/// Status light paired with a gate leaf. Lit while the gate is open.
pub trait Indicator {
    fn set_active(&self, active: bool);
}
