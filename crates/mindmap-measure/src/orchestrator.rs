//! Fan-out and join of measurement requests.
//!
//! A pass has three steps:
//!
//! 1. **Plan**: walk the tree, normalize the texts being measured and
//!    describe one [`PlannedRequest`] per node and field.
//! 2. **Run**: issue every request at once and wait until each has
//!    resolved. Nothing is cancelled when one fails.
//! 3. **Apply**: if every request succeeded, write widths and line lists
//!    onto the nodes. A pass with any failure writes nothing.

use futures::future::{join_all, FutureExt};
use log::{debug, trace};
use mindmap_core::{
    ContentKind, Font, MeasureError, MeasureField, MeasurementFailure, MeasurementFailures,
    MindTree, NodeId, ProbeBox, SharedStyle, Size,
};

use crate::collaborator::{MeasureRequest, TextMeasurer};
use crate::normalize::non_empty_lines;

/// Fixed inputs of every measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureSettings {
    /// Font family sent with every request
    pub font_family: String,
    /// Title used when a node's title is empty after cleanup
    pub placeholder_title: String,
    /// Probe box for title width measurement
    pub title_probe: ProbeBox,
    /// Probe height for every line-splitting request
    pub split_probe_height: f64,
}

impl Default for MeasureSettings {
    fn default() -> Self {
        Self {
            font_family: "Heiti SC".to_string(),
            placeholder_title: "branch topic".to_string(),
            title_probe: ProbeBox::new(400.0, 50.0),
            split_probe_height: 50.0,
        }
    }
}

/// One request to issue, tagged with the node and field it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRequest {
    pub node: NodeId,
    pub field: MeasureField,
    pub request: MeasureRequest,
}

/// A normalized reply, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    TitleWidth(Size),
    TitleLines(Vec<String>),
    FileNameLines(Vec<String>),
    ContentLines(Vec<String>),
}

impl Reply {
    pub fn field(&self) -> MeasureField {
        match self {
            Reply::TitleWidth(_) => MeasureField::TitleWidth,
            Reply::TitleLines(_) => MeasureField::TitleLines,
            Reply::FileNameLines(_) => MeasureField::FileNameLines,
            Reply::ContentLines(_) => MeasureField::ContentLines,
        }
    }
}

/// One successful request.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub node: NodeId,
    pub reply: Reply,
}

/// Results of a pass in which every request succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasuredText {
    pub measurements: Vec<Measurement>,
}

impl MeasuredText {
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Write the results onto the tree.
    ///
    /// Title widths get the shared horizontal title padding added; line
    /// lists replace the node's derived lists.
    pub fn apply(self, tree: &mut MindTree, shared: &SharedStyle) {
        for Measurement { node, reply } in self.measurements {
            let Some(node) = tree.get_mut(node) else {
                continue;
            };
            match reply {
                Reply::TitleWidth(size) => {
                    node.title_box.width = size.width + shared.title_padding.horizontal();
                }
                Reply::TitleLines(lines) => node.data.title_list = lines,
                Reply::FileNameLines(lines) => node.data.file_name_list = lines,
                Reply::ContentLines(lines) => node.data.content_list = lines,
            }
        }
    }
}

/// Normalize texts and describe every request of a pass.
///
/// Titles that clean up to nothing are replaced by the placeholder. Cleaned
/// titles and text bodies are written back onto the nodes.
pub fn plan_requests(
    tree: &mut MindTree,
    measurer: &dyn TextMeasurer,
    settings: &MeasureSettings,
    shared: &SharedStyle,
) -> Vec<PlannedRequest> {
    let mut planned = Vec::new();

    for id in tree.preorder_ids() {
        let Some(node) = tree.get_mut(id) else {
            continue;
        };

        let mut title = measurer.clear_control_chars(node.data.title());
        if title.is_empty() {
            title = settings.placeholder_title.clone();
        }
        node.data.set_title(title.clone());

        let title_font = Font::new(settings.font_family.clone(), node.style.title.font_size);
        let split_probe = |width: f64| ProbeBox::new(width, settings.split_probe_height);

        planned.push(PlannedRequest {
            node: id,
            field: MeasureField::TitleWidth,
            request: MeasureRequest::new(title.clone(), title_font.clone(), settings.title_probe),
        });

        match node.data.content_type() {
            ContentKind::Title => {
                planned.push(PlannedRequest {
                    node: id,
                    field: MeasureField::TitleLines,
                    request: MeasureRequest::new(
                        title,
                        title_font,
                        split_probe(shared.max_title_width),
                    ),
                });
            }
            ContentKind::Attachment => {
                let first = node
                    .data
                    .has_content()
                    .then(|| node.data.serialized_content())
                    .flatten()
                    .and_then(|items| items.into_iter().next());
                if let Some(first) = first {
                    let file_name = first
                        .get("file_name")
                        .and_then(|v| v.as_str())
                        .unwrap_or("");
                    planned.push(PlannedRequest {
                        node: id,
                        field: MeasureField::FileNameLines,
                        request: MeasureRequest::new(
                            measurer.clear_control_chars(file_name),
                            title_font,
                            split_probe(node.style.file_name.width),
                        ),
                    });
                }
            }
            ContentKind::Text => {
                let body = node.data.content_text().filter(|text| !text.is_empty());
                if let Some(body) = body {
                    let text = measurer.clear_control_chars(body);
                    node.data.set_content(text.clone());
                    let font = Font::new(settings.font_family.clone(), node.style.text.font_size);
                    planned.push(PlannedRequest {
                        node: id,
                        field: MeasureField::ContentLines,
                        request: MeasureRequest::new(text, font, split_probe(node.style.text.width)),
                    });
                }
            }
            _ => {}
        }
    }

    planned
}

/// Issue every planned request concurrently and wait for all of them.
///
/// Returns the successful replies when nothing failed, or every failure in
/// issue order otherwise.
pub async fn run_requests(
    planned: Vec<PlannedRequest>,
    measurer: &dyn TextMeasurer,
) -> Result<MeasuredText, MeasurementFailures> {
    debug!("issuing {} measurement requests", planned.len());

    let pending = planned.into_iter().map(|PlannedRequest { node, field, request }| {
        trace!("{field} of node {node}: {:?}", request.text);
        let reply = match field {
            MeasureField::TitleWidth => measurer
                .measure_width(request)
                .map(|result| result.and_then(check_width).map(Reply::TitleWidth))
                .boxed(),
            MeasureField::FileNameLines => measurer
                .split_lines(request)
                .map(|result| result.map(|reply| Reply::FileNameLines(reply.into_lines())))
                .boxed(),
            MeasureField::TitleLines => measurer
                .split_lines(request)
                .map(|result| {
                    result.map(|reply| Reply::TitleLines(non_empty_lines(reply.into_lines())))
                })
                .boxed(),
            MeasureField::ContentLines => measurer
                .split_lines(request)
                .map(|result| {
                    result.map(|reply| Reply::ContentLines(non_empty_lines(reply.into_lines())))
                })
                .boxed(),
        };
        reply.map(move |result| (node, field, result))
    });

    let settled = join_all(pending).await;

    let mut measurements = Vec::with_capacity(settled.len());
    let mut failures = Vec::new();
    for (node, field, result) in settled {
        match result {
            Ok(reply) => measurements.push(Measurement { node, reply }),
            Err(source) => failures.push(MeasurementFailure { node, field, source }),
        }
    }

    if failures.is_empty() {
        Ok(MeasuredText { measurements })
    } else {
        Err(MeasurementFailures(failures))
    }
}

/// Plan and run every measurement request for `tree`.
///
/// The returned future settles only after every request has settled.
pub async fn measure_all(
    tree: &mut MindTree,
    measurer: &dyn TextMeasurer,
    settings: &MeasureSettings,
    shared: &SharedStyle,
) -> Result<MeasuredText, MeasurementFailures> {
    let planned = plan_requests(tree, measurer, settings, shared);
    run_requests(planned, measurer).await
}

fn check_width(size: Size) -> Result<Size, MeasureError> {
    if size.width.is_finite() && size.width >= 0.0 {
        Ok(size)
    } else {
        Err(MeasureError::invalid_reply(format!(
            "width {} is not a finite, non-negative number",
            size.width
        )))
    }
}
