//! Segmented 6-slot input for one-time codes. The parent owns the digit
//! signal and the slot refs so it can clear and refocus the group after a
//! resend or a failed verification; this component owns typing, backspace
//! focus movement, and whole-code paste.

use crate::features::auth::flow::{self, OTP_LEN};
use leptos::html;
use leptos::prelude::*;

/// Moves focus to the given slot, ignoring slots that are not mounted.
pub fn focus_slot(slots: &[NodeRef<html::Input>], index: usize) {
    if let Some(input) = slots.get(index).and_then(NodeRef::get) {
        let _ = input.focus();
    }
}

/// Renders the six single-digit slots.
#[component]
pub fn OtpInput(digits: RwSignal<Vec<String>>, slots: Vec<NodeRef<html::Input>>) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-2" role="group" aria-label="One-time code">
            {(0..OTP_LEN)
                .map(|index| {
                    let node_ref = slots[index];
                    let slots_for_input = slots.clone();
                    let slots_for_key = slots.clone();
                    let slots_for_paste = slots.clone();

                    view! {
                        <input
                            node_ref=node_ref
                            type="text"
                            inputmode="numeric"
                            autocomplete={if index == 0 { "one-time-code" } else { "off" }}
                            autofocus={index == 0}
                            aria-label=format!("Digit {}", index + 1)
                            class="h-12 w-12 rounded-lg border border-gray-300 bg-gray-50 text-center text-lg font-semibold text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                            prop:value=move || digits.with(|ds| ds[index].clone())
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                match flow::normalize_digit(&raw) {
                                    Some(digit) => {
                                        let value = digit.to_string();
                                        if let Some(input) =
                                            slots_for_input.get(index).and_then(NodeRef::get)
                                        {
                                            input.set_value(&value);
                                        }
                                        digits.update(|ds| ds[index] = value);
                                        if index + 1 < OTP_LEN {
                                            focus_slot(&slots_for_input, index + 1);
                                        }
                                    }
                                    None => {
                                        if let Some(input) =
                                            slots_for_input.get(index).and_then(NodeRef::get)
                                        {
                                            input.set_value("");
                                        }
                                        digits.update(|ds| ds[index].clear());
                                    }
                                }
                            }
                            on:keydown=move |ev| {
                                // Backspace on an empty slot walks back without
                                // clearing the previous slot's value.
                                if ev.key() == "Backspace"
                                    && index > 0
                                    && digits.with_untracked(|ds| ds[index].is_empty())
                                {
                                    focus_slot(&slots_for_key, index - 1);
                                }
                            }
                            on:paste=move |ev| {
                                ev.prevent_default();
                                let text = ev
                                    .clipboard_data()
                                    .and_then(|data| data.get_data("text").ok())
                                    .unwrap_or_default();
                                let Some(code) = flow::parse_paste(&text) else {
                                    return;
                                };
                                digits.update(|ds| {
                                    for (slot, digit) in ds.iter_mut().zip(code) {
                                        *slot = digit.to_string();
                                    }
                                });
                                for (slot_index, digit) in code.iter().enumerate() {
                                    if let Some(input) =
                                        slots_for_paste.get(slot_index).and_then(NodeRef::get)
                                    {
                                        input.set_value(&digit.to_string());
                                    }
                                }
                                focus_slot(&slots_for_paste, OTP_LEN - 1);
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
