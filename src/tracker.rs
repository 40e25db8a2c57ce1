//! What the order-tracking screen shows for a status.
//!
//! The tracker never changes a status; it only maps the status it is given
//! to a progress bar. A rejected order gets a separate terminal view with no
//! progress at all.

use crate::model::{OrderStatus, StatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

/// One dot of the progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub status: OrderStatus,
    pub label: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Progress {
        current: OrderStatus,
        steps: Vec<Step>,
        /// Steps before the current one.
        completed: usize,
        /// Width of the filled bar, `0..=100`.
        progress_percent: u8,
        headline: &'static str,
        message: &'static str,
    },
    Rejected {
        headline: &'static str,
        message: &'static str,
    },
}

const REJECTED_HEADLINE: &str = "Pedido Recusado";

fn step_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Aguardando",
        OrderStatus::Accepted => "Aceito",
        OrderStatus::Preparing => "Preparando",
        OrderStatus::Ready => "Pronto",
        OrderStatus::Rejected => "Recusado",
    }
}

fn message(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Aguardando o restaurante confirmar seu pedido",
        OrderStatus::Accepted => "O restaurante aceitou seu pedido!",
        OrderStatus::Preparing => "Seu pedido está sendo preparado com carinho",
        OrderStatus::Ready => "Seu pedido está pronto para entrega!",
        OrderStatus::Rejected => "Infelizmente o restaurante não pôde aceitar seu pedido",
    }
}

impl StatusView {
    pub fn for_status(status: OrderStatus) -> Self {
        // Rejected is the only negative rank.
        let Ok(current) = usize::try_from(status.rank()) else {
            return StatusView::Rejected {
                headline: REJECTED_HEADLINE,
                message: message(status),
            };
        };

        let steps = OrderStatus::STEPS
            .iter()
            .enumerate()
            .map(|(index, &step)| Step {
                status: step,
                label: step_label(step),
                state: match index.cmp(&current) {
                    std::cmp::Ordering::Less => StepState::Completed,
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Greater => StepState::Upcoming,
                },
            })
            .collect();
        let last = OrderStatus::STEPS.len() - 1;

        StatusView::Progress {
            current: status,
            steps,
            completed: current,
            progress_percent: (current * 100 / last) as u8,
            headline: status.label(),
            message: message(status),
        }
    }

    /// Builds the view for a status received as text.
    pub fn parse(raw: &str) -> Result<Self, StatusError> {
        raw.parse().map(Self::for_status)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, StatusView::Rejected { .. })
    }

    pub fn headline(&self) -> &'static str {
        match self {
            StatusView::Progress { headline, .. } | StatusView::Rejected { headline, .. } => *headline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(view: &StatusView) -> Vec<StepState> {
        match view {
            StatusView::Progress { steps, .. } => steps.iter().map(|s| s.state).collect(),
            StatusView::Rejected { .. } => panic!("expected progress view"),
        }
    }

    #[test]
    fn test_pending_is_first_step() {
        let view = StatusView::for_status(OrderStatus::Pending);
        assert_eq!(
            states(&view),
            [StepState::Current, StepState::Upcoming, StepState::Upcoming, StepState::Upcoming]
        );
        assert!(matches!(view, StatusView::Progress { completed: 0, progress_percent: 0, .. }));
    }

    #[test]
    fn test_completed_steps_follow_rank() {
        for status in OrderStatus::STEPS {
            let view = StatusView::for_status(status);
            let StatusView::Progress { completed, current, .. } = &view else {
                panic!("expected progress view for {status}");
            };
            assert_eq!(*completed as i8, status.rank());
            assert_eq!(*current, status);
            let done = states(&view)
                .into_iter()
                .filter(|s| *s == StepState::Completed)
                .count();
            assert_eq!(done, *completed);
        }
    }

    #[test]
    fn test_preparing_view() {
        let view = StatusView::for_status(OrderStatus::Preparing);
        assert_eq!(
            states(&view),
            [StepState::Completed, StepState::Completed, StepState::Current, StepState::Upcoming]
        );
        let StatusView::Progress { progress_percent, message, steps, .. } = view else {
            panic!("expected progress view");
        };
        assert_eq!(progress_percent, 66);
        assert_eq!(message, "Seu pedido está sendo preparado com carinho");
        assert_eq!(steps[2].label, "Preparando");
    }

    #[test]
    fn test_ready_fills_the_bar() {
        let view = StatusView::for_status(OrderStatus::Ready);
        assert!(matches!(view, StatusView::Progress { progress_percent: 100, completed: 3, .. }));
        assert_eq!(view.headline(), "Pronto para entrega");
    }

    #[test]
    fn test_rejected_is_terminal_view() {
        let view = StatusView::for_status(OrderStatus::Rejected);
        assert!(view.is_rejected());
        assert_eq!(view.headline(), "Pedido Recusado");
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert_eq!(
            StatusView::parse("delivered"),
            Err(StatusError::InvalidStatus("delivered".into()))
        );
        assert!(StatusView::parse("rejected").unwrap().is_rejected());
        assert!(!StatusView::parse("accepted").unwrap().is_rejected());
    }
}
