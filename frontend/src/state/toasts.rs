//! Transient success/failure notices for form submissions.

use std::rc::Rc;

use yew::Reducible;

pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: u32,
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.items.push(Toast { id: next.next_id, notice });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.items.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_toasts_get_distinct_ids() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(Notice::success("sent")))
            .reduce(ToastAction::Push(Notice::error("failed")));
        let ids: Vec<u32> = toasts.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(Notice::success("a")))
            .reduce(ToastAction::Push(Notice::success("b")))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].notice.message, "b");
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(Notice::error("x")))
            .reduce(ToastAction::Dismiss(42));
        assert_eq!(toasts.items.len(), 1);
    }
}
