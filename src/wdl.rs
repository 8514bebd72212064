use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::board::{Outcome, Player};

/// Trait to convert an absolute outcome to a relative one.
pub trait NonPov: Sized {
    type Output: Pov<Output = Self>;

    /// View this outcome from the POV of `pov`.
    fn pov(self, pov: Player) -> Self::Output;
}

/// The opposite of [NonPov].
pub trait Pov: Sized {
    type Output: NonPov<Output = Self>;

    /// The opposite of [NonPov::pov].
    fn un_pov(self, pov: Player) -> Self::Output;
}

impl<I: NonPov> NonPov for Option<I> {
    type Output = Option<I::Output>;
    fn pov(self, pov: Player) -> Option<I::Output> {
        self.map(|inner| inner.pov(pov))
    }
}

impl<I: Pov> Pov for Option<I> {
    type Output = Option<I::Output>;
    fn un_pov(self, pov: Player) -> Option<I::Output> {
        self.map(|inner| inner.un_pov(pov))
    }
}

/// The outcome of a game from the POV of a certain player.
/// Usually obtained through [NonPov::pov] on an [Outcome].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutcomeWDL {
    Win,
    Draw,
    Loss,
}

/// A collection of win/draw/loss counts or weights.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WDL<V> {
    pub win: V,
    pub draw: V,
    pub loss: V,
}

impl NonPov for Outcome {
    type Output = OutcomeWDL;

    fn pov(self, pov: Player) -> OutcomeWDL {
        match self {
            Outcome::WonBy(player) if player == pov => OutcomeWDL::Win,
            Outcome::WonBy(_) => OutcomeWDL::Loss,
            Outcome::Draw => OutcomeWDL::Draw,
        }
    }
}

impl Pov for OutcomeWDL {
    type Output = Outcome;

    fn un_pov(self, pov: Player) -> Outcome {
        match self {
            OutcomeWDL::Win => Outcome::WonBy(pov),
            OutcomeWDL::Draw => Outcome::Draw,
            OutcomeWDL::Loss => Outcome::WonBy(pov.other()),
        }
    }
}

impl OutcomeWDL {
    /// Convert this to a [WDL] with a one at the correct place and zero otherwise.
    pub fn to_wdl<V: num_traits::One + num_traits::Zero>(self) -> WDL<V> {
        match self {
            OutcomeWDL::Win => WDL {
                win: V::one(),
                draw: V::zero(),
                loss: V::zero(),
            },
            OutcomeWDL::Draw => WDL {
                win: V::zero(),
                draw: V::one(),
                loss: V::zero(),
            },
            OutcomeWDL::Loss => WDL {
                win: V::zero(),
                draw: V::zero(),
                loss: V::one(),
            },
        }
    }

    /// Convert a win to `1`, draw to `0` and loss to `-1`.
    pub fn sign<V: num_traits::Zero + num_traits::One + std::ops::Neg<Output = V>>(self) -> V {
        match self {
            OutcomeWDL::Win => V::one(),
            OutcomeWDL::Draw => V::zero(),
            OutcomeWDL::Loss => -V::one(),
        }
    }
}

impl<V: Copy + Add<Output = V>> WDL<V> {
    pub fn total(self) -> V {
        self.win + self.draw + self.loss
    }
}

impl<V: Add<Output = V>> Add for WDL<V> {
    type Output = WDL<V>;

    fn add(self, rhs: Self) -> Self::Output {
        WDL {
            win: self.win + rhs.win,
            draw: self.draw + rhs.draw,
            loss: self.loss + rhs.loss,
        }
    }
}

impl<V: Copy + Add<Output = V>> AddAssign for WDL<V> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<V: num_traits::Zero + Add<Output = V>> Sum for WDL<V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(
            WDL {
                win: V::zero(),
                draw: V::zero(),
                loss: V::zero(),
            },
            |acc, x| acc + x,
        )
    }
}
