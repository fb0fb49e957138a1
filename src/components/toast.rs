//! Toast Notification Component
//!
//! Success and error banners raised from anywhere in the app. Both clear
//! themselves after a few seconds; errors can also be dismissed by hand.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 print-hidden">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        variant=ToastVariant::Error
                        on_dismiss=Callback::new(move |_| state.clear_error())
                    />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "⚠",
        }
    }

    fn bg_class(self) -> &'static str {
        match self {
            ToastVariant::Success => "bg-green-600",
            ToastVariant::Error => "bg-red-600",
        }
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             animate-slide-in",
            variant.bg_class()
        )>
            <span class="text-lg">{variant.icon()}</span>
            <span class="text-sm font-medium">{message}</span>
            {on_dismiss.map(|dismiss| view! {
                <button
                    class="pl-2 text-white/70 hover:text-white"
                    on:click=move |_| dismiss.call(())
                >
                    "✕"
                </button>
            })}
        </div>
    }
}
