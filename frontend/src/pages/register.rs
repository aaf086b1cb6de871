use crate::app::AppRoute;
use crate::submission::{AttemptId, FormState, Submission, SubmissionState};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use signup_console_dto::register::{RegisterError, RegisterOutcome, RegisterRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_nested_router::prelude::*;

const REGISTER_URL: &str = "/register";
const LOGIN_REDIRECT_MS: u32 = 2_000;

pub struct RegisterForm {
    form: FormState,
    submission: Submission,
    nav_timer: Option<Timeout>,
}

pub enum Msg {
    UpdateUsername(String),
    UpdatePassword(String),
    Submit,
    Resolved {
        attempt: AttemptId,
        outcome: RegisterOutcome,
    },
    Redirect,
}

impl Component for RegisterForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::default(),
            submission: Submission::default(),
            nav_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateUsername(value) => {
                self.form.set_username(value);
                true
            }
            Msg::UpdatePassword(value) => {
                self.form.set_password(value);
                true
            }
            Msg::Submit => {
                let attempt = self.submission.begin();
                let request = RegisterRequest {
                    username: self.form.username().to_string(),
                    password: self.form.password().to_string(),
                };

                let callback = ctx
                    .link()
                    .callback(move |outcome: RegisterOutcome| Msg::Resolved { attempt, outcome });

                wasm_bindgen_futures::spawn_local(async move {
                    let response = Request::post(REGISTER_URL)
                        .header("Content-Type", "application/json")
                        .json(&request)
                        .expect("Failed to serialize request")
                        .send()
                        .await;

                    let outcome = match response {
                        Ok(res) if res.ok() => RegisterOutcome::Success,
                        Ok(res) => {
                            // Body may be absent or malformed, both mean no detail.
                            let detail =
                                res.json::<RegisterError>().await.ok().and_then(|e| e.detail);
                            RegisterOutcome::Rejected { detail }
                        }
                        Err(err) => {
                            gloo::console::error!(format!("Registration request failed: {err:?}"));
                            RegisterOutcome::Unreachable
                        }
                    };

                    callback.emit(outcome);
                });

                true
            }
            Msg::Resolved { attempt, outcome } => {
                let Some(state) = self.submission.resolve(attempt, &outcome) else {
                    log::debug!("stale registration attempt {attempt} discarded");
                    return false;
                };
                self.form.apply(state);
                if *state == SubmissionState::Succeeded {
                    gloo::console::log!("Registration successful!");
                    let link = ctx.link().clone();
                    self.nav_timer = Some(Timeout::new(LOGIN_REDIRECT_MS, move || {
                        link.send_message(Msg::Redirect);
                    }));
                }
                true
            }
            Msg::Redirect => {
                match ctx.link().context::<RouterContext<AppRoute>>(Callback::noop()) {
                    Some((router, _)) => router.push(AppRoute::Login),
                    None => log::error!("no router in scope, staying on the registration page"),
                }
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // A pending redirect must not fire into a dismounted view.
        if let Some(timer) = self.nav_timer.take() {
            timer.cancel();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_username = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateUsername(input.value())
        });
        let on_password = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdatePassword(input.value())
        });

        html! {
            <PageSection>
                <div class="register">
                    <p>{"Create an account"}</p>
                    <form {onsubmit}>
                        <TextInput
                            r#type={TextInputType::Text}
                            placeholder="Username"
                            required=true
                            value={self.form.username().to_string()}
                            oninput={on_username}
                        />
                        <TextInput
                            r#type={TextInputType::Password}
                            placeholder="Password"
                            required=true
                            value={self.form.password().to_string()}
                            oninput={on_password}
                        />
                        <Button label="Register" r#type={ButtonType::Submit} disabled={self.submission.submitting()} />
                    </form>
                    if let Some(error) = self.form.error() {
                        <div class="error">{ error }</div>
                    }
                    if self.form.success() {
                        <div class="success">{"Registration successful! Redirecting to login..."}</div>
                    }
                </div>
            </PageSection>
        }
    }
}
