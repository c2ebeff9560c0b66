//! Optimizer trait

/// Learning-rate capability of an optimization algorithm
///
/// Schedulers only ever touch the scalar learning rate of the optimizer they
/// drive, so this is the whole surface they depend on. Parameter updates
/// stay with the concrete optimizer.
pub trait Optimizer {
    /// Get learning rate
    fn lr(&self) -> f64;

    /// Set learning rate
    fn set_lr(&mut self, lr: f64);
}

impl<O: Optimizer + ?Sized> Optimizer for &mut O {
    fn lr(&self) -> f64 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f64) {
        (**self).set_lr(lr);
    }
}

impl<O: Optimizer + ?Sized> Optimizer for Box<O> {
    fn lr(&self) -> f64 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f64) {
        (**self).set_lr(lr);
    }
}
