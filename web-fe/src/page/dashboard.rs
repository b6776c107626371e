use std::rc::Rc;

use log::error;
use web_sys::{FormData, HtmlFormElement};
use yew::{html::Scope, prelude::*};

use crate::{
    config::{csrf::csrf_token_from_document, endpoint::EndpointConfig},
    model::{event::EventRow, form::EventForm},
    panel::{EventPanel, EventView},
    service::event_api::HttpEventApi,
    sys::locale::BrowserLocale,
};

type Panel = EventPanel<HttpEventApi, PageView, BrowserLocale>;

pub struct DashboardPage {
    panel: Rc<Panel>,
    create_event_form: NodeRef,
    csrf_token: String,
    rows: Option<Vec<EventRow>>,
    submitting: bool,
}

pub enum DashboardPageMsg {
    RenderEvents { rows: Vec<EventRow> },
    SetBusy { busy: bool },
    SubmitCreateEvent,
}

/// Hands the panel's view updates back to the component.
pub struct PageView {
    link: Scope<DashboardPage>,
    form: NodeRef,
}

impl EventView for PageView {
    fn render_events(&self, rows: Vec<EventRow>) {
        self.link
            .send_message(DashboardPageMsg::RenderEvents { rows });
    }

    fn reset_form(&self) {
        match self.form.cast::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => error!("create event form not mounted"),
        }
    }

    fn set_busy(&self, busy: bool) {
        self.link.send_message(DashboardPageMsg::SetBusy { busy });
    }

    fn alert(&self, msg: &str) {
        let Some(window) = web_sys::window() else {
            error!("window not found, dropped alert: {msg}");
            return;
        };
        if let Err(e) = window.alert_with_message(msg) {
            error!("alert failed: {e:?}");
        }
    }
}

impl DashboardPage {
    fn load_events(&self) {
        let panel = self.panel.clone();
        wasm_bindgen_futures::spawn_local(async move {
            panel.load_events().await;
        });
    }

    fn read_form(&self) -> Option<EventForm> {
        let form = self.create_event_form.cast::<HtmlFormElement>()?;
        let data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                error!("read form data: {e:?}");
                return None;
            }
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();

        Some(EventForm {
            title: field("title"),
            description: field("description"),
            start_time: field("start_time"),
            end_time: field("end_time"),
            attendees: field("attendees"),
            csrf_token: field("csrf_token"),
        })
    }
}

impl Component for DashboardPage {
    type Message = DashboardPageMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let create_event_form = NodeRef::default();
        let config = EndpointConfig::load_from_localstorage();
        let view = PageView {
            link: ctx.link().clone(),
            form: create_event_form.clone(),
        };
        let panel = Rc::new(EventPanel::new(
            HttpEventApi::new(config.events_path()),
            view,
            BrowserLocale,
        ));

        let csrf_token = csrf_token_from_document().unwrap_or_else(|e| {
            error!("load csrf token: {e}");
            String::new()
        });

        let page = Self {
            panel,
            create_event_form,
            csrf_token,
            rows: None,
            submitting: false,
        };
        page.load_events();
        page
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DashboardPageMsg::RenderEvents { rows } => {
                self.rows = Some(rows);
                true
            }
            DashboardPageMsg::SetBusy { busy } => {
                self.submitting = busy;
                true
            }
            DashboardPageMsg::SubmitCreateEvent => {
                let Some(form) = self.read_form() else {
                    return false;
                };
                let panel = self.panel.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    panel.submit_event(form).await;
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_submit = {
            let link = ctx.link().clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                link.send_message(DashboardPageMsg::SubmitCreateEvent);
            })
        };

        html! {
            <div class="container-sm" style="padding-top: 1em; padding-bottom: 1em;">
                <h3>{"Create Event"}</h3>
                <form id="createEventForm" ref={self.create_event_form.clone()} onsubmit={on_submit}>
                    <input type="hidden" name="csrf_token" value={self.csrf_token.clone()} />
                    <div class="mb-3">
                        <label for="title" class="form-label">{"Title"}</label>
                        <input type="text" class="form-control" id="title" name="title" required=true />
                    </div>
                    <div class="mb-3">
                        <label for="description" class="form-label">{"Description"}</label>
                        <textarea class="form-control" id="description" name="description" />
                    </div>
                    <div class="row mb-3">
                        <div class="col">
                            <label for="start_time" class="form-label">{"Start"}</label>
                            <input type="datetime-local" class="form-control" id="start_time" name="start_time" required=true />
                        </div>
                        <div class="col">
                            <label for="end_time" class="form-label">{"End"}</label>
                            <input type="datetime-local" class="form-control" id="end_time" name="end_time" required=true />
                        </div>
                    </div>
                    <div class="mb-3">
                        <label for="attendees" class="form-label">{"Attendees"}</label>
                        <input type="text" class="form-control" id="attendees" name="attendees"
                            placeholder="a@example.com, b@example.com" />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={self.submitting}>
                        if self.submitting {
                            <span class="spinner-border spinner-border-sm" role="status"></span>
                        }
                        {" Create Event"}
                    </button>
                </form>

                <hr/>

                <h3>{"Upcoming Events"}</h3>
                <ul id="eventList" class="list-group">
                    {
                        match &self.rows {
                            None => html! {
                                <li class="list-group-item placeholder-glow">
                                    <span class="placeholder col-6"></span>
                                </li>
                            },
                            Some(rows) => rows.iter().map(|row| html! {
                                <li class="list-group-item">{row.to_string()}</li>
                            }).collect::<Html>(),
                        }
                    }
                </ul>
            </div>
        }
    }
}
