use super::confirmation_dialog::{markup_to_plain_text, DialogArgs};
use super::labels;
use super::services::DialogServices;
use super::{ContentKey, ContentRegistry, ModalType};
use crate::canvas::{CanvasOps, SharedCanvas};
use crate::error::{CanvasError, DialogError};
use crate::tool::CANVAS_TOOLBOX_SELECTOR;

/// What the dialog does once a decision handler has run
#[derive(Debug)]
pub(crate) enum Outcome {
    /// Nothing beyond closing the surface
    Close,
    /// Resolve the caller's confirmation
    Resolve(bool),
    /// Close, then open another dialog
    FollowUp {
        modal_type: ModalType,
        args: DialogArgs,
    },
}

/// A zero-argument continuation bound to one decision label
pub(crate) type DecisionHandler = Box<dyn FnOnce() -> Result<Outcome, CanvasError>>;

pub(crate) type Decisions = Vec<(&'static str, DecisionHandler)>;

fn close() -> DecisionHandler {
    Box::new(|| Ok(Outcome::Close))
}

fn require_canvas(modal_type: ModalType, args: Option<&DialogArgs>) -> Result<SharedCanvas, DialogError> {
    args.and_then(|args| args.canvas.clone())
        .ok_or(DialogError::MissingArgument {
            modal_type,
            argument: "a canvas",
        })
}

/// Affirmative handler that runs a single canvas operation
fn canvas_op(canvas: SharedCanvas, op: fn(&mut dyn CanvasOps) -> Result<(), CanvasError>) -> DecisionHandler {
    Box::new(move || {
        op(&mut *canvas.lock())?;
        Ok(Outcome::Close)
    })
}

/// Build the labelled handlers for one session of `modal_type`
pub(crate) fn build_decisions(
    modal_type: ModalType,
    args: Option<&DialogArgs>,
    registry: &ContentRegistry,
    services: &DialogServices,
) -> Result<Decisions, DialogError> {
    let decisions: Decisions = match modal_type {
        ModalType::Help => vec![(labels::ALRIGHT, close())],
        ModalType::StartUp => vec![(labels::GET_STARTED, close())],
        ModalType::Info | ModalType::Error => vec![(labels::OK, close())],
        ModalType::PageLeave => vec![
            // The caller performs the navigation once the confirmation resolves
            (labels::YES, Box::new(|| Ok(Outcome::Resolve(true))) as DecisionHandler),
            (labels::NO, close()),
        ],
        ModalType::CanvasCreate => {
            let canvas = require_canvas(modal_type, args)?;
            let size = args
                .and_then(|args| args.callback_args)
                .ok_or(DialogError::MissingArgument {
                    modal_type,
                    argument: "canvas dimensions",
                })?;
            let invalid = registry.get(ContentKey::CanvasInvalidProportions)?.clone();
            let no_space_title = registry.get(ContentKey::CanvasNoSpace)?.title.clone();
            let viewport = services.viewport.clone();

            let create: DecisionHandler = Box::new(move || {
                let result = canvas.lock().create(size.width, size.height);
                viewport.scroll_to(viewport.position_of(CANVAS_TOOLBOX_SELECTOR));

                match result {
                    Ok(()) => Ok(Outcome::Close),
                    Err(CanvasError::InvalidProportions { width, height }) => {
                        log::warn!("Rejected canvas proportions {}x{}", width, height);
                        Ok(Outcome::FollowUp {
                            modal_type: ModalType::Info,
                            args: DialogArgs::default()
                                .with_title(invalid.title)
                                .with_text(markup_to_plain_text(&invalid.text)),
                        })
                    }
                    Err(CanvasError::NoSpace { width, height, .. }) => {
                        let (max_width, max_height) = {
                            let canvas = canvas.lock();
                            (canvas.max_width(), canvas.max_height())
                        };
                        log::warn!(
                            "No space for a {}x{} canvas, offering {}x{}",
                            width, height, max_width, max_height
                        );
                        Ok(Outcome::FollowUp {
                            modal_type: ModalType::CanvasCreateNoSpace,
                            args: DialogArgs::default()
                                .with_title(no_space_title)
                                .with_text(format!(
                                    "The dimensions selected exceed the available space. \
                                     Would you like to create the biggest possible canvas \
                                     (width: {max_width}, height: {max_height})?"
                                ))
                                .with_canvas(canvas),
                        })
                    }
                    Err(err) => Err(err),
                }
            });

            vec![(labels::YES, create), (labels::NO, close())]
        }
        ModalType::CanvasCreateNoSpace => {
            let canvas = require_canvas(modal_type, args)?;
            let create_bounded: DecisionHandler = Box::new(move || {
                let mut canvas = canvas.lock();
                let (max_width, max_height) = (canvas.max_width(), canvas.max_height());
                canvas.create_bounded(max_width, max_height)?;
                Ok(Outcome::Close)
            });
            vec![(labels::YES, create_bounded), (labels::NO, close())]
        }
        ModalType::CanvasLoad => {
            let file_selector = services.file_selector.clone();
            let load: DecisionHandler = Box::new(move || {
                file_selector.show_file_dialog();
                Ok(Outcome::Close)
            });
            vec![(labels::YES, load), (labels::NO, close())]
        }
        ModalType::CanvasSave => {
            let canvas = require_canvas(modal_type, args)?;
            vec![(labels::YES, canvas_op(canvas, |c| c.save())), (labels::NO, close())]
        }
        ModalType::CanvasReset => {
            let canvas = require_canvas(modal_type, args)?;
            vec![(labels::YES, canvas_op(canvas, |c| c.reset())), (labels::NO, close())]
        }
        ModalType::CanvasExport => {
            let canvas = require_canvas(modal_type, args)?;
            vec![(labels::YES, canvas_op(canvas, |c| c.export_artwork())), (labels::NO, close())]
        }
    };

    debug_assert_eq!(
        decisions.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
        modal_type.decision_labels()
    );

    Ok(decisions)
}
