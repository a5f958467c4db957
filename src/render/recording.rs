use crate::{
    animation::transition::TransitionRequest, foundation::error::PageDotsResult,
    model::shapes::ShapeSet, render::backend::RenderBackend,
};

/// One call received by a [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    Draw(ShapeSet),
    Animate(TransitionRequest),
}

/// Backend that keeps every call it receives, in order.
///
/// Useful for hosts that forward the calls to their own toolkit, and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn drain(&mut self) -> Vec<BackendCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn draws(&self) -> impl Iterator<Item = &ShapeSet> {
        self.calls.iter().filter_map(|c| match c {
            BackendCall::Draw(s) => Some(s),
            BackendCall::Animate(_) => None,
        })
    }

    pub fn requests(&self) -> impl Iterator<Item = &TransitionRequest> {
        self.calls.iter().filter_map(|c| match c {
            BackendCall::Animate(r) => Some(r),
            BackendCall::Draw(_) => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn draw(&mut self, shapes: &ShapeSet) -> PageDotsResult<()> {
        self.calls.push(BackendCall::Draw(shapes.clone()));
        Ok(())
    }

    fn animate(&mut self, request: &TransitionRequest) -> PageDotsResult<()> {
        self.calls.push(BackendCall::Animate(*request));
        Ok(())
    }
}
