//! Simulated transport. Nothing leaves the process; a carrier only decides
//! whether an sms counts as received by the handset.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Carrier {
    fn received(&mut self) -> bool;
}

pub type SharedCarrier = Rc<RefCell<dyn Carrier>>;

/// Coin flip per message.
pub struct RandomCarrier {
    rng: StdRng,
}

impl RandomCarrier {
    /// Without a seed the generator is seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Carrier for RandomCarrier {
    fn received(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedCarrier(pub bool);

impl Carrier for FixedCarrier {
    fn received(&mut self) -> bool {
        self.0
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    #[default]
    Random,
    Always,
    Never,
}

impl DeliveryMode {
    pub fn carrier(self, seed: Option<u64>) -> SharedCarrier {
        match self {
            DeliveryMode::Random => Rc::new(RefCell::new(RandomCarrier::new(seed))),
            DeliveryMode::Always => Rc::new(RefCell::new(FixedCarrier(true))),
            DeliveryMode::Never => Rc::new(RefCell::new(FixedCarrier(false))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(carrier: &mut dyn Carrier, n: usize) -> Vec<bool> {
        (0..n).map(|_| carrier.received()).collect()
    }

    #[test]
    fn same_seed_same_outcomes() {
        let a = draw(&mut RandomCarrier::new(Some(42)), 64);
        let b = draw(&mut RandomCarrier::new(Some(42)), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn random_carrier_yields_both_outcomes() {
        let outcomes = draw(&mut RandomCarrier::new(Some(7)), 256);
        assert!(outcomes.iter().any(|r| *r));
        assert!(outcomes.iter().any(|r| !*r));
    }

    #[test]
    fn fixed_modes_never_vary() {
        let always = DeliveryMode::Always.carrier(None);
        let never = DeliveryMode::Never.carrier(None);
        for _ in 0..10 {
            assert!(always.borrow_mut().received());
            assert!(!never.borrow_mut().received());
        }
    }
}
