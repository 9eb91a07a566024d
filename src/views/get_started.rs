use dioxus::prelude::*;

use crate::request::{submit_demo_request, DemoRequest, SubmissionStatus};
use crate::Route;

/// Demo request form, the default target of every "Get started" button.
#[component]
pub fn GetStarted() -> Element {
    let mut request = use_signal(DemoRequest::default);
    let mut submitting = use_signal(|| false);
    let mut submission_status = use_signal(|| SubmissionStatus::Idle);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let data = match request.read().prepare() {
            Ok(data) => data,
            Err(err) => {
                submission_status.set(SubmissionStatus::Invalid(err));
                return;
            }
        };

        submitting.set(true);
        spawn(async move {
            // web builds reach the server function over HTTP
            let result = submit_demo_request(data).await.map_err(|err| err.to_string());
            if let Err(err) = &result {
                tracing::warn!("demo request failed: {err}");
            } else {
                request.set(DemoRequest::default());
            }
            submission_status.set(SubmissionStatus::from_result(result));
            submitting.set(false);
        });
    };

    rsx! {
        nav { class: "navbar",
            Link { to: Route::Home {}, class: "brand", "CarePulse" }
        }

        div { class: "request-container",
            h1 { "Request a demo" }
            p { class: "request-intro",
                "Tell us a little about your organization and we'll set up a walkthrough with your own reporting calendar."
            }

            if let Some(message) = submission_status.read().message() {
                div { class: "status-message", "{message}" }
            }

            form { onsubmit: submit,
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    value: "{request.read().name}",
                    oninput: move |event| request.write().name = event.value(),
                }

                label { r#for: "email", "Work email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{request.read().email}",
                    oninput: move |event| request.write().email = event.value(),
                }

                label { r#for: "organization", "Organization" }
                input {
                    id: "organization",
                    value: "{request.read().organization}",
                    oninput: move |event| request.write().organization = event.value(),
                }

                label { r#for: "message", "Anything we should know?" }
                textarea {
                    id: "message",
                    value: "{request.read().message}",
                    placeholder: "Registries you report to, go-live dates...",
                    oninput: move |event| request.write().message = event.value(),
                }

                button {
                    r#type: "submit",
                    class: "submit-btn",
                    disabled: submitting(),
                    if submitting() { "Sending..." } else { "Request demo" }
                }
            }
        }
    }
}
