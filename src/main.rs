// src/main.rs: Activity Board (Rust + Yew + WASM)
use std::rc::Rc;

use activity_board::render::{ActivityCard, ListView, ParticipantRow, ParticipantsView, NO_PARTICIPANTS};
use activity_board::{ActivityBoard, BoardConfig, BoardHost, HttpActivityApi, StatusBar, StatusMessage};
use gloo::console;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: BoardConfig,
}

/// The page side of the board: every write lands in a Yew state handle.
struct PageHost {
    list: UseStateHandle<ListView>,
    options: UseStateHandle<Vec<String>>,
    email: UseStateHandle<String>,
    selected: UseStateHandle<String>,
    status: UseStateHandle<StatusBar>,
    redraw: UseForceUpdateHandle,
}

impl BoardHost for PageHost {
    fn render_list(&self, view: ListView) {
        self.list.set(view);
    }

    fn set_options(&self, names: Vec<String>) {
        self.options.set(names);
    }

    fn show_status(&self, message: StatusMessage) {
        let now = js_sys::Date::now();
        let bar = StatusBar::show(message, now);
        let delay = bar.ms_until_hidden(now).unwrap_or_default();
        self.status.set(bar);

        // Only redraws; StatusBar decides what is still visible.
        let redraw = self.redraw.clone();
        Timeout::new(delay, move || {
            redraw.force_update();
        })
        .forget();
    }

    fn reset_form(&self) {
        self.email.set(String::new());
        self.selected.set(String::new());
    }

    fn confirm(&self, prompt: &str) -> bool {
        gloo::dialogs::confirm(prompt)
    }

    fn log_error(&self, line: &str) {
        console::error!(line);
    }
}

type Board = ActivityBoard<HttpActivityApi, PageHost>;

fn view_participants(card: &ActivityCard, on_remove: &Callback<ParticipantRow>) -> Html {
    match &card.participants {
        ParticipantsView::Empty => html! {
            <p class="no-participants"><em>{ NO_PARTICIPANTS }</em></p>
        },
        ParticipantsView::List(rows) => html! {
            <ul>
              { for rows.iter().map(|row| {
                  let onclick = {
                      let row = row.clone();
                      on_remove.reform(move |_: MouseEvent| row.clone())
                  };
                  html! {
                    <li class="participant-item">
                      <span class="participant-email">{ row.email.clone() }</span>
                      <button class="delete-participant" title="Unregister" {onclick}>{ "×" }</button>
                    </li>
                  }
              }) }
            </ul>
        },
    }
}

fn view_card(card: &ActivityCard, on_remove: &Callback<ParticipantRow>) -> Html {
    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability()) }</p>
        <div class="participants-list">
          <strong>{ "Participants:" }</strong>
          { view_participants(card, on_remove) }
        </div>
      </div>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let list = use_state(ListView::default);
    let options = use_state(Vec::<String>::new);
    let email = use_state(String::new);
    let selected = use_state(String::new);
    let status = use_state(StatusBar::default);
    let redraw = use_force_update();

    let board: Rc<Board> = Rc::new(ActivityBoard::new(
        HttpActivityApi::new(props.config.api_base.clone()),
        PageHost {
            list: list.clone(),
            options: options.clone(),
            email: email.clone(),
            selected: selected.clone(),
            status: status.clone(),
            redraw,
        },
    ));

    // Load once on first render
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                board.load_activities().await;
            });
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_submit = {
        let board = board.clone();
        let email = (*email).clone();
        let activity = (*selected).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let board = board.clone();
            let email = email.clone();
            let activity = activity.clone();
            spawn_local(async move {
                board.submit_signup(&email, &activity).await;
            });
        })
    };

    let on_remove = {
        let board = board.clone();
        Callback::from(move |row: ParticipantRow| {
            let board = board.clone();
            spawn_local(async move {
                board.unregister_participant(&row.email, &row.activity).await;
            });
        })
    };

    let list_block = match &*list {
        ListView::Ready(cards) => html! {
          <>{ for cards.iter().map(|card| view_card(card, &on_remove)) }</>
        },
        other => html! { <p>{ other.notice().unwrap_or_default() }</p> },
    };

    let status_block = match status.visible_at(js_sys::Date::now()) {
        Some(m) => html! { <div id="message" class={m.severity.class()}>{ m.text.clone() }</div> },
        None => html! { <div id="message" class="hidden"></div> },
    };

    html! {
      <main>
        <section id="activities-container">
          <h3>{ "Available Activities" }</h3>
          <div id="activities-list">{ list_block }</div>
        </section>

        <section id="signup-container">
          <h3>{ "Sign Up for an Activity" }</h3>
          <form id="signup-form" onsubmit={on_submit}>
            <div class="form-group">
              <label for="email">{ "Student Email:" }</label>
              <input
                type="email"
                id="email"
                required={true}
                placeholder="your-email@mergington.edu"
                value={(*email).clone()}
                oninput={on_email_input}
              />
            </div>
            <div class="form-group">
              <label for="activity">{ "Select Activity:" }</label>
              <select id="activity" required={true} onchange={on_activity_change}>
                <option value="" selected={selected.is_empty()}>{ "-- Select an activity --" }</option>
                { for options.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == *selected}>{ name.clone() }</option>
                }) }
              </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
          </form>
          { status_block }
        </section>
      </main>
    }
}

fn main() {
    let config = BoardConfig::from_document().unwrap_or_else(|e| {
        console::error!(e.to_string());
        BoardConfig::default()
    });
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
