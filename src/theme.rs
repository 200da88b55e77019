//! Light/dark preference, kept in `localStorage` like the rest of the UI settings.

use std::rc::Rc;

use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeMode {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(self.toggled()),
        }
    }
}

fn load_theme() -> ThemeMode {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(THEME_STORAGE_KEY) {
                if let Some(mode) = ThemeMode::parse(&raw) {
                    return mode;
                }
            }
        }
    }
    ThemeMode::default()
}

fn save_theme(mode: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
        }
    }
}

/// Toggles the `dark` class on `<html>` so the stylesheet can switch palettes.
fn apply_theme(mode: ThemeMode) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root
            .class_list()
            .toggle_with_force("dark", mode == ThemeMode::Dark);
    }
}

pub type ThemeHandle = UseReducerHandle<ThemeMode>;

#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("use_theme called outside ThemeProvider")
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(load_theme);

    use_effect_with_deps(
        move |mode: &ThemeMode| {
            apply_theme(*mode);
            save_theme(*mode);
            || ()
        },
        *theme,
    );

    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            { for props.children.iter() }
        </ContextProvider<ThemeHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mode = Rc::new(ThemeMode::Light);
        let mode = mode.reduce(ThemeAction::Toggle);
        assert_eq!(*mode, ThemeMode::Dark);
        let mode = mode.reduce(ThemeAction::Toggle);
        assert_eq!(*mode, ThemeMode::Light);
    }

    #[test]
    fn stored_values_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::parse("sepia"), None);
    }
}
