use winit::window::Window;

/// Port through which the driver asks the host for its next frame.
pub trait FrameScheduler {
    fn schedule_next_tick(&mut self);
    fn cancel_scheduled_tick(&mut self);
}

/// Schedules ticks as winit redraw requests.
///
/// winit cannot withdraw a redraw request, so cancelling clears `pending` and
/// the host drops the next `RedrawRequested` if nothing re-armed it.
pub struct RedrawScheduler<'a> {
    pub window: &'a Window,
    pub pending: &'a mut bool,
}

impl FrameScheduler for RedrawScheduler<'_> {
    fn schedule_next_tick(&mut self) {
        *self.pending = true;
        self.window.request_redraw();
    }

    fn cancel_scheduled_tick(&mut self) {
        *self.pending = false;
    }
}

/// Counts scheduling calls, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Counting {
    pub pending: bool,
    pub scheduled: usize,
    pub cancelled: usize,
}

#[cfg(test)]
impl FrameScheduler for Counting {
    fn schedule_next_tick(&mut self) {
        self.pending = true;
        self.scheduled += 1;
    }

    fn cancel_scheduled_tick(&mut self) {
        self.pending = false;
        self.cancelled += 1;
    }
}
