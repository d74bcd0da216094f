use crate::domain::model::{PiPrecision, Report};
use crate::utils::error::Result;

/// One console exercise: validated inputs in, a report out.
pub trait Exercise {
    fn name(&self) -> &'static str;
    fn run(&self) -> Result<Report>;
}

impl<E: Exercise + ?Sized> Exercise for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run(&self) -> Result<Report> {
        (**self).run()
    }
}

pub trait SettingsProvider {
    fn float_precision(&self) -> usize;
    fn pi_precision(&self) -> PiPrecision;
}
