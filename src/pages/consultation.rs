use futures::future::{abortable, AbortHandle};
use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::{ModalState, SuccessModal};
use crate::components::press::PressButton;
use crate::config;
use crate::consultation::field::{FieldId, FieldKind, CONSULTATION_TYPES};
use crate::consultation::form::{ConsultationForm, SubmitState};
use crate::consultation::request::ConsultationRequest;
use crate::consultation::transport::{Transport, TransportError};

/// How long the submission error banner stays up.
pub const ERROR_BANNER_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ConsultationSectionProps {
    #[prop_or_else(config::consultation_transport)]
    pub transport: Transport,
}

pub enum ConsultationMsg {
    Input(FieldId, String),
    Blur(FieldId),
    Submit,
    Submitted(Result<(), TransportError>),
    Aborted,
    DismissBanner,
    CloseModal,
}

/// What the component has to do after a transport result lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Followup {
    None,
    ModalOpened,
    ShowBanner,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Started(ConsultationRequest),
    AlreadySubmitting,
    Invalid,
}

/// Form, success modal and error banner moved together by the section's
/// messages. Timers and the in-flight future stay with the component.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsultationFlow {
    form: ConsultationForm,
    modal: ModalState,
}

impl Default for ConsultationFlow {
    fn default() -> Self {
        Self {
            form: ConsultationForm::new(),
            modal: ModalState::Hidden,
        }
    }
}

impl ConsultationFlow {
    pub fn form(&self) -> &ConsultationForm {
        &self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn banner_visible(&self) -> bool {
        matches!(self.form.state(), SubmitState::Failed(_))
    }

    pub fn input(&mut self, field: FieldId, value: String) {
        self.form.input(field, value);
    }

    pub fn blur(&mut self, field: FieldId) {
        self.form.blur(field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.form.is_submitting() {
            return SubmitOutcome::AlreadySubmitting;
        }
        match self.form.begin_submit() {
            Some(request) => SubmitOutcome::Started(request),
            None => SubmitOutcome::Invalid,
        }
    }

    pub fn finished(&mut self, result: Result<(), TransportError>) -> Followup {
        if !self.form.is_submitting() {
            return Followup::None;
        }
        let followup = match result {
            Ok(()) => {
                self.modal = self.modal.open();
                Followup::ModalOpened
            }
            Err(_) => Followup::ShowBanner,
        };
        self.form.finish_submit(result);
        followup
    }

    pub fn aborted(&mut self) {
        self.form.cancel_submit();
    }

    pub fn dismiss_banner(&mut self) {
        if self.banner_visible() {
            self.form.acknowledge();
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = self.modal.close();
        if self.form.state() == &SubmitState::Succeeded {
            self.form.acknowledge();
        }
    }
}

pub struct ConsultationSection {
    flow: ConsultationFlow,
    in_flight: Option<AbortHandle>,
    banner_timeout: Option<Timeout>,
}

impl Component for ConsultationSection {
    type Message = ConsultationMsg;
    type Properties = ConsultationSectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: ConsultationFlow::default(),
            in_flight: None,
            banner_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ConsultationMsg::Input(field, value) => {
                self.flow.input(field, value);
                true
            }
            ConsultationMsg::Blur(field) => {
                self.flow.blur(field);
                true
            }
            ConsultationMsg::Submit => {
                let request = match self.flow.submit() {
                    SubmitOutcome::Started(request) => request,
                    SubmitOutcome::AlreadySubmitting => {
                        info!("Consultation booking already in flight, ignoring submit");
                        return false;
                    }
                    SubmitOutcome::Invalid => {
                        info!("Consultation form has errors, not submitting");
                        return true;
                    }
                };
                info!("Submitting {} consultation booking", request.consultation_type);
                self.banner_timeout = None;

                let (submission, handle) = abortable(ctx.props().transport.submit(request));
                self.in_flight = Some(handle);
                ctx.link().send_future(async move {
                    match submission.await {
                        Ok(result) => ConsultationMsg::Submitted(result),
                        Err(_) => ConsultationMsg::Aborted,
                    }
                });
                true
            }
            ConsultationMsg::Submitted(result) => {
                self.in_flight = None;
                if let Err(e) = &result {
                    error!("Form submission error: {}", e);
                }
                match self.flow.finished(result) {
                    Followup::ModalOpened => info!("Consultation booking sent"),
                    Followup::ShowBanner => {
                        let link = ctx.link().clone();
                        self.banner_timeout = Some(Timeout::new(ERROR_BANNER_MS, move || {
                            link.send_message(ConsultationMsg::DismissBanner);
                        }));
                    }
                    Followup::None => {}
                }
                true
            }
            ConsultationMsg::Aborted => {
                self.in_flight = None;
                self.flow.aborted();
                true
            }
            ConsultationMsg::DismissBanner => {
                self.banner_timeout = None;
                self.flow.dismiss_banner();
                true
            }
            ConsultationMsg::CloseModal => {
                self.flow.close_modal();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ConsultationMsg::Submit
        });
        let submitting = self.flow.form().is_submitting();

        html! {
            <section id="consultation" class="consultation">
                <style>
                    {r#"
                        .consultation {
                            padding: 5rem 1.5rem;
                            background: #f5f5f0;
                        }
                        .consultation__inner {
                            max-width: 640px;
                            margin: 0 auto;
                        }
                        .form-group {
                            display: flex;
                            flex-direction: column;
                            margin-bottom: 1.25rem;
                        }
                        .form-group label {
                            font-weight: 500;
                            margin-bottom: 0.5rem;
                        }
                        .form-control {
                            padding: 0.75rem 1rem;
                            border: 1px solid rgba(94, 82, 64, 0.2);
                            border-radius: 8px;
                            font-size: 1rem;
                            background: #fff;
                        }
                        .field-error {
                            color: #c0152f;
                            font-size: 0.85rem;
                            margin-top: 0.25rem;
                        }
                        .form-error {
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            background: rgba(192, 21, 47, 0.1);
                            border: 1px solid #c0152f;
                            color: #c0152f;
                            padding: 0.75rem;
                            border-radius: 8px;
                            margin-top: 1rem;
                        }
                        .form-error button {
                            background: none;
                            border: none;
                            color: inherit;
                            font-size: 1.25rem;
                            cursor: pointer;
                        }
                        .spinner {
                            display: inline-block;
                            width: 14px;
                            height: 14px;
                            border: 2px solid rgba(255,255,255,.4);
                            border-radius: 50%;
                            border-top-color: #fff;
                            animation: spin 1s linear infinite;
                        }
                        @keyframes spin { to { transform: rotate(360deg); } }
                    "#}
                </style>
                <div class="consultation__inner">
                    <h2>{"Book Your Free Consultation"}</h2>
                    <p>{"Tell us a little about yourself and a coach will get back to you within 24 hours."}</p>
                    <form id="consultation-form" class={classes!(self.flow.form().has_errors().then(|| "has-errors"))} novalidate=true {onsubmit}>
                        { for FieldId::ALL.iter().map(|field| self.view_field(ctx, *field)) }
                        <PressButton button_type="submit" class={classes!("btn--primary", "btn--full-width")} disabled={submitting}>
                            {
                                if submitting {
                                    html! { <><span class="spinner"></span>{" Submitting..."}</> }
                                } else {
                                    html! { {"Book Consultation"} }
                                }
                            }
                        </PressButton>
                        { self.view_banner(ctx) }
                    </form>
                </div>
                <SuccessModal
                    visible={self.flow.modal().is_visible()}
                    on_close={ctx.link().callback(|_| ConsultationMsg::CloseModal)}
                />
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.banner_timeout = None;
    }
}

impl ConsultationSection {
    fn view_field(&self, ctx: &Context<Self>, field: FieldId) -> Html {
        let value = self.flow.form().value(field).to_string();
        let error = self.flow.form().error(field);
        let style = error.map(|_| "border-color: #c0152f;");
        let onblur = ctx.link().callback(move |_: FocusEvent| ConsultationMsg::Blur(field));

        let control = match field.kind() {
            FieldKind::Select => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    ConsultationMsg::Input(field, select.value())
                });
                html! {
                    <select id={field.name()} name={field.name()} class="form-control"
                        required={field.required()} {style} {oninput} {onblur}>
                        <option value="" selected={value.is_empty()}>{"Select consultation type"}</option>
                        { for CONSULTATION_TYPES.iter().map(|(key, label)| html! {
                            <option value={*key} selected={value == *key}>{*label}</option>
                        }) }
                    </select>
                }
            }
            FieldKind::Textarea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                    ConsultationMsg::Input(field, textarea.value())
                });
                html! {
                    <textarea id={field.name()} name={field.name()} class="form-control" rows="4"
                        placeholder={field.placeholder()} required={field.required()}
                        {value} {style} {oninput} {onblur} />
                }
            }
            kind => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ConsultationMsg::Input(field, input.value())
                });
                html! {
                    <input type={kind.input_type()} id={field.name()} name={field.name()} class="form-control"
                        placeholder={field.placeholder()} required={field.required()}
                        {value} {style} {oninput} {onblur} />
                }
            }
        };

        html! {
            <div class="form-group">
                <label for={field.name()}>{field.label()}</label>
                { control }
                {
                    if let Some(error) = error {
                        html! { <div class="field-error">{error.to_string()}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn view_banner(&self, ctx: &Context<Self>) -> Html {
        if !self.flow.banner_visible() {
            return html! {};
        }
        html! {
            <div class="form-error" role="alert">
                <span>
                    {"⚠ Sorry, there was an error submitting your form. Please try again or contact us directly."}
                </span>
                <button type="button" aria-label="Dismiss" onclick={ctx.link().callback(|_| ConsultationMsg::DismissBanner)}>
                    {"×"}
                </button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConsultationFlow {
        let mut flow = ConsultationFlow::default();
        flow.input(FieldId::FullName, "Jordan Reyes".into());
        flow.input(FieldId::Mobile, "5551234567".into());
        flow.input(FieldId::Email, "jordan@example.com".into());
        flow.input(FieldId::ConsultationType, "mindset".into());
        flow
    }

    fn started(flow: &mut ConsultationFlow) -> ConsultationRequest {
        match flow.submit() {
            SubmitOutcome::Started(request) => request,
            other => panic!("submission did not start: {:?}", other),
        }
    }

    #[test]
    fn success_opens_modal_and_clears_form() {
        let mut flow = filled();
        started(&mut flow);
        assert_eq!(flow.modal(), ModalState::Hidden);

        assert_eq!(flow.finished(Ok(())), Followup::ModalOpened);
        assert_eq!(flow.modal(), ModalState::Visible);
        assert_eq!(flow.form().state(), &SubmitState::Succeeded);
        assert_eq!(flow.form().value(FieldId::Email), "");
        assert!(!flow.banner_visible());
    }

    #[test]
    fn closing_modal_returns_to_idle() {
        let mut flow = filled();
        started(&mut flow);
        flow.finished(Ok(()));

        flow.close_modal();
        assert_eq!(flow.modal(), ModalState::Hidden);
        assert_eq!(flow.form().state(), &SubmitState::Idle);
    }

    #[test]
    fn failure_shows_banner_and_keeps_modal_hidden() {
        let mut flow = filled();
        started(&mut flow);

        let followup = flow.finished(Err(TransportError::Rejected { status: 502 }));
        assert_eq!(followup, Followup::ShowBanner);
        assert!(flow.banner_visible());
        assert_eq!(flow.modal(), ModalState::Hidden);
        assert_eq!(flow.form().value(FieldId::FullName), "Jordan Reyes");
    }

    #[test]
    fn dismissing_banner_returns_to_idle() {
        let mut flow = filled();
        started(&mut flow);
        flow.finished(Err(TransportError::Network("offline".into())));

        flow.dismiss_banner();
        assert!(!flow.banner_visible());
        assert_eq!(flow.form().state(), &SubmitState::Idle);
    }

    #[test]
    fn dismissing_banner_leaves_success_alone() {
        let mut flow = filled();
        started(&mut flow);
        flow.finished(Ok(()));

        flow.dismiss_banner();
        assert_eq!(flow.form().state(), &SubmitState::Succeeded);
        assert_eq!(flow.modal(), ModalState::Visible);
    }

    #[test]
    fn submit_in_flight_is_told_apart_from_invalid() {
        let mut empty = ConsultationFlow::default();
        assert_eq!(empty.submit(), SubmitOutcome::Invalid);

        let mut flow = filled();
        started(&mut flow);
        assert_eq!(flow.submit(), SubmitOutcome::AlreadySubmitting);
        assert!(flow.form().is_submitting());
    }

    #[test]
    fn result_after_abort_is_ignored() {
        let mut flow = filled();
        started(&mut flow);
        flow.aborted();

        assert_eq!(flow.finished(Ok(())), Followup::None);
        assert_eq!(flow.modal(), ModalState::Hidden);
        assert_eq!(flow.form().state(), &SubmitState::Idle);
    }
}
