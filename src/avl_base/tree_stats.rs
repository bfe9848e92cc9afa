use super::rotation::BalanceResultFlags;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub left_rotations: usize,
    pub right_rotations: usize,
    pub double_rotations: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single rotations performed, counting both halves of a double rotation.
    pub fn rotations(&self) -> usize {
        self.left_rotations + self.right_rotations
    }

    pub fn reset_rotations(&mut self) {
        self.left_rotations = 0;
        self.right_rotations = 0;
        self.double_rotations = 0;
    }

    pub(crate) fn record(&mut self, flags: BalanceResultFlags) {
        if flags.contains(BalanceResultFlags::RotateLeft) {
            self.left_rotations += 1;
        }
        if flags.contains(BalanceResultFlags::RotateRight) {
            self.right_rotations += 1;
        }
        if flags.contains(BalanceResultFlags::Double) {
            self.double_rotations += 1;
        }
    }
}
