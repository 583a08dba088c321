use dioxus::prelude::*;
use tracing::{debug, info};
use ui::content::{self, FormCopy, InfoItem};
use ui::{use_lang, use_toasts, ContactField, ContactForm, Lang, PageHeader, SiteConfig};

#[component]
pub fn Contact() -> Element {
    let lang = use_lang().current();
    rsx! { ContactPage { lang } }
}

#[component]
fn ContactPage(lang: Lang) -> Element {
    let copy = content::contact(lang);
    let config = use_context::<SiteConfig>();
    let toasts = use_toasts();
    let mut form = use_signal(ContactForm::default);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let missing = form.read().missing_required();
        if !missing.is_empty() {
            debug!(?missing, "contact form incomplete");
            toasts.error(copy.form.missing_fields.to_string(), None);
            return;
        }
        if form.read().has_malformed_email() {
            debug!("contact form email rejected");
            toasts.error(copy.form.invalid_email.to_string(), None);
            return;
        }

        submitting.set(true);
        spawn(async move {
            gloo_timers::future::sleep(config.submit_delay).await;
            info!(lang = %lang, "contact form submitted");
            toasts.success(
                copy.form.success.to_string(),
                Some(copy.form.success_description.to_string()),
            );
            form.write().clear();
            submitting.set(false);
        });
    };

    rsx! {
        PageHeader { title: copy.title, subtitle: copy.subtitle }

        section { class: "section",
            div { class: "container_wide contact_grid",
                form { class: "card contact_form", onsubmit: on_submit,
                    h2 { {copy.form.title} }
                    for field in ContactField::ALL {
                        div { key: "{field.name()}", class: "form_field",
                            label { r#for: "contact-{field.name()}",
                                {field_label(&copy.form, field)}
                                if field.is_required() { span { class: "required", " *" } }
                            }
                            if field == ContactField::Message {
                                textarea {
                                    id: "contact-{field.name()}",
                                    name: field.name(),
                                    rows: 6,
                                    required: true,
                                    value: form.read().get(field).to_string(),
                                    oninput: move |e| form.write().set(field, e.value()),
                                }
                            } else {
                                input {
                                    id: "contact-{field.name()}",
                                    name: field.name(),
                                    r#type: input_type(field),
                                    required: field.is_required(),
                                    value: form.read().get(field).to_string(),
                                    oninput: move |e| form.write().set(field, e.value()),
                                }
                            }
                        }
                    }
                    button {
                        class: "btn primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { {copy.form.submitting} } else { "{copy.form.submit} →" }
                    }
                }

                div { class: "contact_info",
                    h2 { {copy.info_title} }
                    InfoBlock { item: copy.address, icon: "📍" }
                    InfoBlock { item: copy.phone, icon: "☎", href: format!("tel:{}", copy.phone.value) }
                    InfoBlock { item: copy.email, icon: "✉", href: format!("mailto:{}", copy.email.value) }
                    InfoBlock { item: copy.hours, icon: "🕘" }
                }
            }
        }

        section { class: "section section_alt",
            div { class: "container_wide",
                h2 { class: "section_title", {copy.map_title} }
                div { class: "card map_placeholder",
                    p { "📍 {copy.map_placeholder}" }
                    p { class: "hint", {copy.map_city} }
                }
            }
        }
    }
}

#[component]
fn InfoBlock(item: InfoItem, icon: &'static str, href: Option<String>) -> Element {
    rsx! {
        div { class: "info_block",
            span { class: "info_icon", {icon} }
            div {
                h3 { {item.title} }
                if let Some(href) = href {
                    a { href: "{href}", {item.value} }
                } else {
                    for line in item.value.lines() {
                        p { key: "{line}", {line} }
                    }
                }
            }
        }
    }
}

fn field_label(copy: &FormCopy, field: ContactField) -> &'static str {
    match field {
        ContactField::Name => copy.name,
        ContactField::Email => copy.email,
        ContactField::Phone => copy.phone,
        ContactField::Company => copy.company,
        ContactField::Message => copy.message,
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        _ => "text",
    }
}
