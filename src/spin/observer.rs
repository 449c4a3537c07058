use crate::foundation::core::Entry;
use crate::spin::window::VisibleWindow;

/// Receiver for everything a spin emits: one position update per frame and at most one
/// completion per `start`.
pub trait SpinObserver {
    fn on_position_update(&mut self, position: f64, window: &VisibleWindow);
    fn on_spin_complete(&mut self, winner: &Entry);
}

impl<O: SpinObserver + ?Sized> SpinObserver for &mut O {
    fn on_position_update(&mut self, position: f64, window: &VisibleWindow) {
        (**self).on_position_update(position, window)
    }

    fn on_spin_complete(&mut self, winner: &Entry) {
        (**self).on_spin_complete(winner)
    }
}

impl<O: SpinObserver + ?Sized> SpinObserver for Box<O> {
    fn on_position_update(&mut self, position: f64, window: &VisibleWindow) {
        (**self).on_position_update(position, window)
    }

    fn on_spin_complete(&mut self, winner: &Entry) {
        (**self).on_spin_complete(winner)
    }
}

/// Observer built from two closures.
pub struct FnObserver<P, C> {
    on_position: P,
    on_complete: C,
}

impl<P, C> FnObserver<P, C>
where
    P: FnMut(f64, &VisibleWindow),
    C: FnMut(&Entry),
{
    pub fn new(on_position: P, on_complete: C) -> Self {
        Self {
            on_position,
            on_complete,
        }
    }
}

impl<P, C> SpinObserver for FnObserver<P, C>
where
    P: FnMut(f64, &VisibleWindow),
    C: FnMut(&Entry),
{
    fn on_position_update(&mut self, position: f64, window: &VisibleWindow) {
        (self.on_position)(position, window)
    }

    fn on_spin_complete(&mut self, winner: &Entry) {
        (self.on_complete)(winner)
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SpinObserver for NoopObserver {
    fn on_position_update(&mut self, _position: f64, _window: &VisibleWindow) {}

    fn on_spin_complete(&mut self, _winner: &Entry) {}
}
