//! # Model Assembler
//!
//! Runs the four geometry producers concurrently and concatenates their
//! meshes in a fixed order: base, columns, caption, emblem.
//!
//! ## Flow
//!
//! ```text
//!            ┌─ base ────┐
//! context ───┼─ columns ─┼──> one single-slot channel each ──> fixed-order join ──> Mesh
//!            ├─ caption ─┤
//!            └─ emblem ──┘
//! ```
//!
//! Each producer runs as one `rayon` task in its own `tracing` span and owns
//! a private [`Diagnostics`]; the assembler merges them in producer order.
//! Required producers (base, columns) abort the run on failure. Optional
//! producers (caption, emblem) are degraded to an empty mesh plus a warning.
//! A panicking producer is caught and reported like any other failure.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crossbeam_channel::{bounded, Receiver};
use skyline_mesh::primitives::make_base;
use skyline_mesh::Mesh;

use crate::activity::SkylineRequest;
use crate::assets::AssetSource;
use crate::caption::build_captions;
use crate::columns::range_columns;
use crate::diagnostics::Diagnostics;
use crate::dimensions::ModelDimensions;
use crate::emblem::build_emblem;
use crate::error::{ModelError, ModelResult};
use crate::options::SkylineOptions;

/// The four geometry producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Producer {
    Base,
    Columns,
    Caption,
    Emblem,
}

impl Producer {
    /// Every producer in concatenation order.
    pub const ALL: [Producer; 4] = [
        Producer::Base,
        Producer::Columns,
        Producer::Caption,
        Producer::Emblem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Producer::Base => "base",
            Producer::Columns => "columns",
            Producer::Caption => "caption",
            Producer::Emblem => "emblem",
        }
    }

    /// Whether a failure of this producer aborts the run.
    pub fn is_required(self) -> bool {
        matches!(self, Producer::Base | Producer::Columns)
    }

    fn build(self, ctx: &ProducerContext<'_>, diagnostics: &mut Diagnostics) -> ModelResult<Mesh> {
        let options = ctx.options;
        match self {
            Producer::Base => Ok(make_base(ctx.dims.width, ctx.dims.depth)?),
            Producer::Columns => {
                range_columns(ctx.request.years, options.height_scaling, diagnostics)
            }
            Producer::Caption if !options.captions => Ok(disabled(self)),
            Producer::Caption => build_captions(
                ctx.request.subject,
                ctx.request.start_year,
                ctx.request.end_year,
                &ctx.dims,
                &options.primary_font,
                ctx.assets,
                diagnostics,
            ),
            Producer::Emblem if !options.emblem => Ok(disabled(self)),
            Producer::Emblem => build_emblem(&options.emblem_image, &ctx.dims, ctx.assets),
        }
    }
}

fn disabled(producer: Producer) -> Mesh {
    tracing::debug!(producer = producer.name(), "disabled by options");
    Mesh::new()
}

impl fmt::Display for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one producer, with the required/optional policy applied.
#[derive(Debug)]
pub enum ProducerOutcome {
    /// The producer succeeded.
    Built(Mesh),
    /// An optional producer failed; it contributes `mesh` (empty) instead.
    Degraded { mesh: Mesh, reason: String },
    /// A required producer failed.
    Failed(ModelError),
}

impl ProducerOutcome {
    /// Outcome of a producer whose failure is fatal.
    pub fn required(result: ModelResult<Mesh>) -> Self {
        match result {
            Ok(mesh) => Self::Built(mesh),
            Err(err) => Self::Failed(err),
        }
    }

    /// Outcome of a decorative producer; failures become empty geometry.
    pub fn optional(result: ModelResult<Mesh>) -> Self {
        match result {
            Ok(mesh) => Self::Built(mesh),
            Err(err) => Self::Degraded {
                mesh: Mesh::new(),
                reason: err.to_string(),
            },
        }
    }

    /// Applies the policy of `producer`.
    pub fn for_producer(producer: Producer, result: ModelResult<Mesh>) -> Self {
        if producer.is_required() {
            Self::required(result)
        } else {
            Self::optional(result)
        }
    }
}

/// Immutable inputs shared by every producer task.
pub struct ProducerContext<'a> {
    pub request: SkylineRequest<'a>,
    pub dims: ModelDimensions,
    pub options: &'a SkylineOptions,
    pub assets: &'a dyn AssetSource,
    /// Parent span of the per-producer spans.
    pub span: tracing::Span,
}

impl<'a> ProducerContext<'a> {
    /// Derives the model dimensions from the request.
    ///
    /// # Errors
    ///
    /// [`ModelError::Geometry`] when the request holds no years.
    pub fn new(
        request: SkylineRequest<'a>,
        options: &'a SkylineOptions,
        assets: &'a dyn AssetSource,
        span: tracing::Span,
    ) -> ModelResult<Self> {
        Ok(Self {
            dims: ModelDimensions::for_years(request.year_count())?,
            request,
            options,
            assets,
            span,
        })
    }
}

/// What a producer task sends back.
#[derive(Debug)]
pub struct ProducerReport {
    pub outcome: ProducerOutcome,
    pub diagnostics: Diagnostics,
}

/// Runs `build` for `producer`, catching panics and applying the
/// required/optional policy.
pub fn run_producer<F>(producer: Producer, parent: &tracing::Span, build: F) -> ProducerReport
where
    F: FnOnce(&mut Diagnostics) -> ModelResult<Mesh>,
{
    let span = tracing::debug_span!(parent: parent, "producer", name = producer.name());
    let _entered = span.enter();

    let mut diagnostics = Diagnostics::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| build(&mut diagnostics)))
        .unwrap_or_else(|payload| {
            diagnostics.warn(producer.name(), format!("panicked: {}", panic_message(&*payload)));
            Err(ModelError::ProducerLost { producer })
        });

    let outcome = ProducerOutcome::for_producer(producer, result);
    match &outcome {
        ProducerOutcome::Built(mesh) => {
            tracing::debug!(triangles = mesh.triangle_count(), "producer finished");
        }
        ProducerOutcome::Degraded { reason, .. } => {
            diagnostics.warn(
                producer.name(),
                format!("continuing without {producer} geometry: {reason}"),
            );
        }
        ProducerOutcome::Failed(err) => {
            tracing::debug!(error = %err, "producer failed");
        }
    }

    ProducerReport {
        outcome,
        diagnostics,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}

/// Joins the reports in `slots` order into one mesh.
///
/// # Errors
///
/// The first failed required producer in slot order, wrapped in
/// [`ModelError::Producer`], or [`ModelError::ProducerLost`] when a slot's
/// sender was dropped without a report.
pub fn collect(
    slots: Vec<(Producer, Receiver<ProducerReport>)>,
    diagnostics: &mut Diagnostics,
) -> ModelResult<Mesh> {
    let mut mesh = Mesh::new();
    for (producer, slot) in slots {
        let report = slot
            .recv()
            .map_err(|_| ModelError::ProducerLost { producer })?;
        diagnostics.append(report.diagnostics);
        match report.outcome {
            ProducerOutcome::Built(part) | ProducerOutcome::Degraded { mesh: part, .. } => {
                mesh.append(part)
            }
            ProducerOutcome::Failed(err) => return Err(err.in_producer(producer)),
        }
    }
    Ok(mesh)
}

/// Runs all producers concurrently and concatenates their output.
///
/// # Errors
///
/// See [`collect`].
pub fn assemble(ctx: &ProducerContext<'_>, diagnostics: &mut Diagnostics) -> ModelResult<Mesh> {
    let mut slots = Vec::with_capacity(Producer::ALL.len());

    rayon::scope(|scope| {
        for producer in Producer::ALL {
            let (sender, receiver) = bounded(1);
            slots.push((producer, receiver));
            scope.spawn(move |_| {
                let report = run_producer(producer, &ctx.span, |notes| producer.build(ctx, notes));
                // The receiver outlives the scope; a single-slot send never blocks.
                let _ = sender.send(report);
            });
        }
    });

    collect(slots, diagnostics)
}
