use leptos::prelude::*;

/// Select bound to a string signal, with an optional leading placeholder
/// option whose value is the empty string
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected value, written back on change
    value: RwSignal<String>,
    /// Called with the new value after `value` is updated
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Label of the leading "everything" option
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_name = move || name.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=select_name
                class="form__select"
                on:change=move |ev| {
                    let new_value = event_target_value(&ev);
                    value.set(new_value.clone());
                    if let Some(handler) = on_change {
                        handler.run(new_value);
                    }
                }
            >
                {placeholder.map(|text| view! {
                    <option value="" prop:selected=move || value.get().is_empty()>
                        {text}
                    </option>
                })}
                <For
                    each=move || keyed_options(options.get())
                    key=|(key, _, _)| key.clone()
                    children=move |(_, val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Each option keyed by its position and value, so repeated values still
/// render one `<option>` apiece
fn keyed_options(options: Vec<(String, String)>) -> Vec<((usize, String), String, String)> {
    options
        .into_iter()
        .enumerate()
        .map(|(i, (val, label))| ((i, val.clone()), val, label))
        .collect()
}
