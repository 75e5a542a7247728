use futures::channel::oneshot;
use uuid::Uuid;

use super::decisions::{self, Decisions, Outcome};
use super::{Confirmation, ContentRegistry, DialogServices, ModalType};
use crate::canvas::{Dimensions, SharedCanvas};
use crate::error::DialogError;

/// Per-call payload of `ConfirmationDialog::open`.
///
/// `title` and `text` override the registry defaults field by field. The
/// collaborators are only read by the types whose handlers need them.
#[derive(Clone, Default)]
pub struct DialogArgs {
    pub title: Option<String>,
    pub text: Option<String>,
    pub canvas: Option<SharedCanvas>,
    pub callback_args: Option<Dimensions>,
}

impl DialogArgs {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_canvas(mut self, canvas: SharedCanvas) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.callback_args = Some(Dimensions::new(width, height));
        self
    }
}

impl std::fmt::Debug for DialogArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogArgs")
            .field("title", &self.title)
            .field("text", &self.text)
            .field("canvas", &self.canvas.as_ref().map(|_| "<canvas>"))
            .field("callback_args", &self.callback_args)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Open,
    Closed,
}

/// The presentation surface of one dialog session
pub struct DialogSurface {
    session_id: Uuid,
    modal_type: ModalType,
    title: String,
    body: String,
    is_html_body: bool,
    state: SurfaceState,
    labels: Vec<&'static str>,
    decisions: Decisions,
    resolver: Option<oneshot::Sender<bool>>,
}

impl std::fmt::Debug for DialogSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogSurface")
            .field("session_id", &self.session_id)
            .field("modal_type", &self.modal_type)
            .field("title", &self.title)
            .field("state", &self.state)
            .field("labels", &self.labels)
            .finish()
    }
}

impl DialogSurface {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn modal_type(&self) -> ModalType {
        self.modal_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The body as resolved, markup included when `is_html_body` is set
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_html_body(&self) -> bool {
        self.is_html_body
    }

    /// The body as plain text, ready to be shown in a label
    pub fn display_body(&self) -> String {
        if self.is_html_body {
            markup_to_plain_text(&self.body)
        } else {
            self.body.clone()
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Decision labels in display order
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    fn close(&mut self) {
        self.state = SurfaceState::Closed;
        // Dropping the handlers and the resolver ends the session's confirmation
        self.decisions.clear();
        self.resolver = None;
    }
}

/// A single modal dialog that gates canvas operations behind a decision.
///
/// Only one surface exists at a time; opening a new dialog replaces the
/// current one.
#[derive(Debug)]
pub struct ConfirmationDialog {
    registry: ContentRegistry,
    services: DialogServices,
    surface: Option<DialogSurface>,
}

impl ConfirmationDialog {
    pub fn new(registry: ContentRegistry, services: DialogServices) -> Self {
        Self {
            registry,
            services,
            surface: None,
        }
    }

    /// Present the dialog for `modal_type`.
    ///
    /// Fails if the registry has no content for the type or if `args` lacks a
    /// collaborator the type's handlers need.
    pub fn open(&mut self, modal_type: ModalType, args: Option<DialogArgs>) -> Result<Confirmation, DialogError> {
        let defaults = self.registry.get(modal_type.into())?;

        let (title, body, is_html_body) = match &args {
            None => (defaults.title.clone(), defaults.text.clone(), true),
            Some(args) => {
                let title = args.title.clone().unwrap_or_else(|| defaults.title.clone());
                let (body, is_html) = match &args.text {
                    Some(text) => (text.clone(), false),
                    None => (defaults.text.clone(), true),
                };
                (title, body, is_html)
            }
        };

        let decisions = decisions::build_decisions(modal_type, args.as_ref(), &self.registry, &self.services)?;
        let labels = decisions.iter().map(|(label, _)| *label).collect();
        let (resolver, confirmation) = Confirmation::channel();

        if self.is_open() {
            if let Some(previous) = &self.surface {
                log::debug!(
                    "Replacing open {:?} dialog {}",
                    previous.modal_type,
                    previous.session_id
                );
            }
        }

        let session_id = Uuid::new_v4();
        log::info!("Opening {:?} dialog {}", modal_type, session_id);

        self.surface = Some(DialogSurface {
            session_id,
            modal_type,
            title,
            body,
            is_html_body,
            state: SurfaceState::Open,
            labels,
            decisions,
            resolver: Some(resolver),
        });

        Ok(confirmation)
    }

    /// Run the handler bound to `label` and close the surface.
    ///
    /// The surface closes even when the handler's side effect fails; the
    /// failure is returned afterwards. A follow-up dialog requested by the
    /// handler opens once the surface is closed.
    pub fn decide(&mut self, label: &str) -> Result<(), DialogError> {
        let surface = self
            .surface
            .as_mut()
            .filter(|surface| surface.state == SurfaceState::Open)
            .ok_or(DialogError::NotOpen)?;

        let index = surface
            .decisions
            .iter()
            .position(|(candidate, _)| *candidate == label)
            .ok_or_else(|| DialogError::UnknownDecision(label.to_string()))?;

        let (label, handler) = surface.decisions.swap_remove(index);
        let resolver = surface.resolver.take();
        log::info!("Decision '{}' on {:?} dialog {}", label, surface.modal_type, surface.session_id);

        let outcome = handler();
        surface.close();

        match outcome? {
            Outcome::Close => {}
            Outcome::Resolve(value) => {
                if let Some(resolver) = resolver {
                    if resolver.send(value).is_err() {
                        log::debug!("Confirmation dropped before it resolved");
                    }
                }
            }
            Outcome::FollowUp { modal_type, args } => {
                // Nobody holds the follow-up's confirmation
                self.open(modal_type, Some(args))?;
            }
        }

        Ok(())
    }

    /// Close the surface without running any decision
    pub fn close(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            if surface.state == SurfaceState::Open {
                log::info!("Closing {:?} dialog {}", surface.modal_type, surface.session_id);
                surface.close();
            }
        }
    }

    /// Whether a surface exists and is open
    pub fn is_open(&self) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| surface.state == SurfaceState::Open)
    }

    /// The current surface, open or closed
    pub fn surface(&self) -> Option<&DialogSurface> {
        self.surface.as_ref()
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }
}

/// Flatten dialog markup into plain text: tags are dropped, paragraph and line
/// breaks become newlines and the common entities are decoded.
pub fn markup_to_plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        // A tag opens with a letter or '/', anything else is a literal '<'
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/');
        let end = after.find('>').filter(|_| opens_tag);
        let Some(end) = end else {
            text.push('<');
            rest = after;
            continue;
        };

        let tag = after[..end].trim().to_ascii_lowercase();
        if tag.starts_with("br") || tag == "/p" {
            text.push('\n');
        }
        rest = &after[end + 1..];
    }
    text.push_str(rest);

    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
