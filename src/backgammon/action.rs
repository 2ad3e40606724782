use std::fmt::{Debug, Display};

use crate::{backgammon::Step, misc::TinyVec};

/// A player's turn (or half of a doubles turn): the steps in application order.
///
/// Equality and hashing are structural, so two actions built along different
/// generation paths with the same steps compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    steps: TinyVec<Step, 4>,
}

impl Action {
    pub fn single(step: Step) -> Self {
        let mut steps = TinyVec::new();
        steps.push(step);
        Action { steps }
    }

    pub fn pair(first: Step, second: Step) -> Self {
        let mut steps = TinyVec::new();
        steps.push(first);
        steps.push(second);
        Action { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn hits(&self) -> usize {
        self.steps.iter().filter(|step| step.is_hit()).count()
    }

    /// Appends the steps of `other`. Used to record both halves of a doubles
    /// turn as one action.
    pub fn chain(&self, other: &Action) -> Action {
        let mut steps = self.steps;
        for &step in other.steps.iter() {
            steps.push(step);
        }
        Action { steps }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action: ")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::backgammon::Position;

    fn step(from: u8, to: u8) -> Step {
        Step::new(Position::Point(from), Position::Point(to), None)
    }

    #[test]
    fn test_order_matters() {
        let a = Action::pair(step(23, 21), step(21, 18));
        let b = Action::pair(step(21, 18), step(23, 21));
        assert_ne!(a, b);
        assert_eq!(a, Action::pair(step(23, 21), step(21, 18)));
    }

    #[test]
    fn test_dedup_in_set() {
        let mut set = HashSet::new();
        set.insert(Action::pair(step(12, 9), step(7, 6)));
        set.insert(Action::pair(step(12, 9), step(7, 6)));
        set.insert(Action::single(step(12, 9)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_chain_and_display() {
        let first = Action::pair(step(12, 9), step(12, 9));
        let second = Action::single(Step::new(Position::Point(7), Position::Point(4), Some(4)));
        let turn = first.chain(&second);
        assert_eq!(turn.len(), 3);
        assert_eq!(turn.hits(), 1);
        assert_eq!(turn.to_string(), "13/10 13/10 8/5*");
    }
}
