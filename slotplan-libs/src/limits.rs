/// Optional upper bounds on the size of a request. The default places no
/// bound at all; deployments opt in to a cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_participants: usize,
    /// Counted after a participant's repeated slots are removed.
    pub max_slots_per_participant: usize,
}

impl Limits {
    pub fn new(max_participants: usize, max_slots_per_participant: usize) -> Limits {
        Limits {
            max_participants,
            max_slots_per_participant,
        }
    }

    /// Accepts a request of any size.
    ///
    /// # Examples
    /// ```
    /// use slotplan_libs::Limits;
    ///
    /// assert_eq!(Limits::default(), Limits::unbounded());
    /// assert_eq!(Limits::unbounded().max_participants, usize::MAX);
    /// ```
    pub fn unbounded() -> Limits {
        Limits::new(usize::MAX, usize::MAX)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::unbounded()
    }
}
