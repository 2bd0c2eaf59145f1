//! Scripted measurers and layouts shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt};
use mindmap_core::{MeasureError, Point, Size};
use mindmap_layout::{LayoutRegistry, LayoutServices, MindTree, TextMeasurer};
use mindmap_measure::{LineReply, MeasureRequest};

/// Pixels per character of [`Fixed`].
pub const ADVANCE: f64 = 10.0;

fn chunk(text: &str, width: f64) -> Vec<String> {
    let per_line = ((width / ADVANCE) as usize).max(1);
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(per_line).map(|c| c.iter().collect()).collect()
}

/// Ten pixels per character; a line holds `probe.width / 10` characters.
#[derive(Default)]
pub struct Fixed {
    /// Reply to splits with one comma-joined string
    pub joined: bool,
    /// Fail every request whose text contains this
    pub fail_on: Option<&'static str>,
    pub seen: Mutex<Vec<MeasureRequest>>,
}

impl Fixed {
    pub fn joined() -> Self {
        Self { joined: true, ..Self::default() }
    }

    pub fn failing_on(text: &'static str) -> Self {
        Self { fail_on: Some(text), ..Self::default() }
    }

    fn should_fail(&self, request: &MeasureRequest) -> bool {
        self.fail_on.is_some_and(|marker| request.text.contains(marker))
    }
}

impl TextMeasurer for Fixed {
    fn measure_width(&self, request: MeasureRequest) -> BoxFuture<'_, Result<Size, MeasureError>> {
        self.seen.lock().unwrap().push(request.clone());
        if self.should_fail(&request) {
            return future::ready(Err(MeasureError::collaborator("font not loaded"))).boxed();
        }
        let width = request.text.chars().count() as f64 * ADVANCE;
        future::ready(Ok(Size::new(width, 20.0))).boxed()
    }

    fn split_lines(
        &self,
        request: MeasureRequest,
    ) -> BoxFuture<'_, Result<LineReply, MeasureError>> {
        self.seen.lock().unwrap().push(request.clone());
        if self.should_fail(&request) {
            return future::ready(Err(MeasureError::collaborator("font not loaded"))).boxed();
        }
        let lines = chunk(&request.text, request.probe.width);
        let reply = if self.joined {
            LineReply::Joined(lines.join(","))
        } else {
            LineReply::Lines(lines)
        };
        future::ready(Ok(reply)).boxed()
    }
}

/// Same answers as [`Fixed`], but every reply arrives from another thread
/// after a delay that shrinks with each request, so replies land in
/// reverse issue order.
pub struct Delayed {
    remaining: Mutex<u64>,
}

impl Delayed {
    pub fn new(requests: u64) -> Self {
        Self { remaining: Mutex::new(requests) }
    }

    fn later<T: Send + 'static>(&self, value: T) -> BoxFuture<'static, Result<T, MeasureError>> {
        let delay = {
            let mut remaining = self.remaining.lock().unwrap();
            *remaining = remaining.saturating_sub(1);
            Duration::from_millis(*remaining * 5)
        };
        let (tx, rx) = oneshot::channel();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(value);
        });
        rx.map(|reply| reply.map_err(|_| MeasureError::collaborator("reply dropped")))
            .boxed()
    }
}

impl TextMeasurer for Delayed {
    fn measure_width(&self, request: MeasureRequest) -> BoxFuture<'_, Result<Size, MeasureError>> {
        let width = request.text.chars().count() as f64 * ADVANCE;
        self.later(Size::new(width, 20.0))
    }

    fn split_lines(
        &self,
        request: MeasureRequest,
    ) -> BoxFuture<'_, Result<LineReply, MeasureError>> {
        self.later(LineReply::Lines(chunk(&request.text, request.probe.width)))
    }
}

/// Places nodes top to bottom in pre-order, indented by depth.
pub fn stack(tree: &mut MindTree) {
    let mut y = 0.0;
    for id in tree.preorder_ids() {
        let depth = tree.depth(id).unwrap_or(0) as f64;
        if let Some(node) = tree.get_mut(id) {
            node.position = Point::new(depth * 300.0, y);
            y += node.bounds().height + 10.0;
        }
    }
}

/// Leaves every node at the origin.
pub fn pile(_tree: &mut MindTree) {}

pub fn registry() -> LayoutRegistry {
    let mut registry = LayoutRegistry::new();
    registry.register("mindmap", stack);
    registry.register("pile", pile);
    registry
}

pub fn services(measurer: impl TextMeasurer + 'static) -> LayoutServices {
    LayoutServices::new(measurer, registry())
}
