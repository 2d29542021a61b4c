use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

pub enum ToastAction {
    Show {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u32),
}

/// Toast queue driven through `use_reducer`, so timers that fire late
/// always act on the latest list.
#[derive(Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show { title, description, variant } => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    title,
                    description,
                    variant,
                });
                Rc::new(ToastList {
                    next_id: self.next_id.wrapping_add(1),
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(ToastList {
                    next_id: self.next_id,
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

impl ToastAction {
    pub fn success(title: &str, description: &str) -> Self {
        ToastAction::Show {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        ToastAction::Show {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

pub fn toast_callback(toasts: &UseReducerHandle<ToastList>) -> Callback<ToastAction> {
    let dispatcher = toasts.dispatcher();
    Callback::from(move |action: ToastAction| dispatcher.dispatch(action))
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let variant_class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast destructive",
    };

    html! {
        <div class={variant_class} role="status" {onclick}>
            <div class="toast-title">{&props.toast.title}</div>
            <div class="toast-description">{&props.toast.description}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        z-index: 100;
                    }
                    .toast {
                        min-width: 280px;
                        max-width: 360px;
                        padding: 16px 20px;
                        border-radius: 12px;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        cursor: pointer;
                    }
                    .toast.destructive {
                        background: #dc2626;
                        border-color: #b91c1c;
                        color: #fff;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 4px;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(list: Rc<ToastList>, title: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::success(title, ""))
    }

    #[test]
    fn show_appends_with_fresh_ids() {
        let list = show(show(Rc::new(ToastList::default()), "one"), "two");
        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(list.toasts[1].title, "two");
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = show(show(Rc::new(ToastList::default()), "one"), "two");
        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].title, "two");

        // Ids are not reused after a dismissal
        let list = show(list, "three");
        assert_eq!(list.toasts[1].id, 2);
    }

    #[test]
    fn destructive_toasts_keep_their_variant() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::destructive("Email required", "Please enter your email address."));
        assert_eq!(list.toasts[0].variant, ToastVariant::Destructive);
        assert_eq!(list.toasts[0].description, "Please enter your email address.");
    }

    #[test]
    fn dismissing_unknown_id_keeps_the_same_list() {
        let list = show(Rc::new(ToastList::default()), "one");
        let same = Rc::clone(&list).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&list, &same));
    }
}
