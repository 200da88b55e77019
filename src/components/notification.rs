use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::NOTIFICATION_TIMEOUT_MS;

/// Visibility of a toast. Every `raise` yields a distinct value, so the hide timer
/// restarts even when the toast is already showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    serial: u32,
    open: bool,
}

impl Notice {
    pub fn raise(self) -> Self {
        Self {
            serial: self.serial.wrapping_add(1),
            open: true,
        }
    }

    pub fn dismissed(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Notice,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

/// Warning toast that closes on click or after a few seconds.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |notice: &Notice| {
                let timeout = notice.is_open().then(|| {
                    Timeout::new(NOTIFICATION_TIMEOUT_MS, move || on_close.emit(()))
                });
                // Dropping the handle cancels a pending hide.
                move || drop(timeout)
            },
            props.notice,
        );
    }

    if !props.notice.is_open() {
        return html! {};
    }

    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div role="alert" class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex items-center gap-4 bg-amber-100 border border-amber-300 text-amber-900 px-5 py-3 rounded-xl shadow-lg">
            <span class="text-sm font-semibold">{ props.message.clone() }</span>
            <button onclick={on_dismiss} aria-label="Dismiss" class="text-xs font-bold uppercase tracking-widest">{"Close"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!Notice::default().is_open());
    }

    #[test]
    fn repeated_warning_is_a_new_notice() {
        let first = Notice::default().raise();
        let second = first.raise();
        assert!(first.is_open() && second.is_open());
        assert_ne!(first, second);
    }

    #[test]
    fn dismissing_hides_until_raised_again() {
        let shown = Notice::default().raise();
        let hidden = shown.dismissed();
        assert!(!hidden.is_open());
        assert!(hidden.raise().is_open());
        assert_ne!(hidden.raise(), shown);
    }
}
