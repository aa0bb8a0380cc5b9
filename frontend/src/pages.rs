//! DOM rendering of the two pages. Kept thin: every decision is made by the
//! `auth` and `feed` modules, this only wires elements to them.

use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::auth::{self, FormMode, LoginForm};
use crate::document_and_root;
use crate::feed::{self, Feed, FeedError, Interaction};
use crate::local_store::LocalStore;
use crate::models::{Post, User};
use crate::sanitize::{MAX_EMAIL_LEN, MAX_PASSWORD_LEN, MAX_POST_LEN};
use crate::storage::BrowserStorage;

pub fn browser_store() -> Result<LocalStore<BrowserStorage>, JsValue> {
    let storage = BrowserStorage::local().map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(LocalStore::new(storage))
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        error!("render failed: {:?}", err);
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn append(
    document: &Document,
    parent: &Element,
    tag: &str,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if text.is_some() {
        element.set_text_content(text);
    }
    parent.append_child(&element)?;
    Ok(element)
}

fn on_click(element: &Element, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("clickable element is not an HtmlElement"))?
        .set_onclick(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    Ok(())
}

fn on_input(element: &HtmlElement, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    element.set_oninput(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

fn input(
    document: &Document,
    parent: &Element,
    kind: &str,
    placeholder: &str,
    max_length: usize,
) -> Result<HtmlInputElement, JsValue> {
    let element = append(document, parent, "input", None)?.dyn_into::<HtmlInputElement>()?;
    element.set_type(kind);
    element.set_placeholder(placeholder);
    element.set_max_length(max_length as i32);
    Ok(element)
}

/// Runs a feed interaction, sending anonymous users to the login page.
fn interaction_handler(current_user: Option<User>, action: Interaction) -> impl FnMut() + 'static {
    move || match feed::interact(current_user.as_ref(), action) {
        Ok(notice) => alert(&notice.to_string()),
        Err(FeedError::LoginRequired) => report(render_page_login()),
    }
}

fn render_post(
    document: &Document,
    list: &Element,
    post: &Post,
    current_user: &Option<User>,
) -> Result<(), JsValue> {
    let card = append(document, list, "div", None)?;
    card.set_class_name("post-card");

    append(document, &card, "h3", Some(&post.author))?;
    append(document, &card, "span", Some(&post.timestamp))?;
    // text content is escaped by the DOM
    append(document, &card, "p", Some(&format!("{} {}", post.emoji, post.content)))?;

    let counts = [
        (Interaction::Like, post.likes),
        (Interaction::Comment, post.comments),
        (Interaction::Share, post.shares),
    ];
    for (action, count) in counts {
        let button = append(
            document,
            &card,
            "button",
            Some(&format!("{} {}", action.label(), count)),
        )?;
        on_click(&button, interaction_handler(current_user.clone(), action))?;
    }

    Ok(())
}

pub fn render_page_feed(current_user: Option<User>) -> Result<(), JsValue> {
    let (document, root) = document_and_root()?;
    root.set_inner_html("");
    let store = browser_store()?;

    let header = append(&document, &root, "div", None)?;
    match &current_user {
        Some(user) => {
            append(&document, &header, "span", Some(&format!("Signed in as {}", user.name)))?;
            let logout = append(&document, &header, "button", Some("Log out"))?;
            on_click(&logout, || {
                report(browser_store().and_then(|store| {
                    auth::logout(&store);
                    render_page_feed(None)
                }));
            })?;
        }
        None => {
            let login = append(&document, &header, "button", Some("Log in"))?;
            on_click(&login, || report(render_page_login()))?;
        }
    }

    let editor = append(&document, &root, "div", None)?;
    for action in [
        Interaction::Bold,
        Interaction::Italic,
        Interaction::Underline,
        Interaction::UnorderedList,
        Interaction::OrderedList,
        Interaction::CodeBlock,
        Interaction::DeleteClear,
        Interaction::Attachment,
        Interaction::VoiceInput,
        Interaction::Camera,
    ] {
        let tool = append(&document, &editor, "button", Some(action.label()))?;
        on_click(&tool, interaction_handler(current_user.clone(), action))?;
    }

    let textarea = append(&document, &editor, "textarea", None)?
        .dyn_into::<HtmlTextAreaElement>()?;
    textarea.set_placeholder("How are you feeling today?");
    textarea.set_max_length(MAX_POST_LEN as i32);

    let send = append(&document, &editor, "button", Some("Send"))?;
    let feed = Rc::new(RefCell::new(Feed::load(&store)));
    let submit_user = current_user.clone();
    let submit_feed = feed.clone();
    on_click(&send, move || {
        let raw = textarea.value();
        let result = browser_store().and_then(|store| {
            match submit_feed
                .borrow_mut()
                .submit(&store, submit_user.as_ref(), &raw)
            {
                Ok(Some(_)) => render_page_feed(submit_user.clone()),
                Ok(None) => Ok(()),
                Err(FeedError::LoginRequired) => render_page_login(),
            }
        });
        report(result);
    })?;

    let list = append(&document, &root, "div", None)?;
    let posts = feed.borrow();
    if posts.posts.is_empty() {
        append(&document, &list, "h3", Some("No posts yet"))?;
        append(&document, &list, "p", Some("Be the first to share something!"))?;
    }
    for post in posts.posts.iter() {
        render_post(&document, &list, post, &current_user)?;
    }

    Ok(())
}

fn render_login_form(form: Rc<RefCell<LoginForm>>) -> Result<(), JsValue> {
    let (document, root) = document_and_root()?;
    root.set_inner_html("");

    let mode = form.borrow().mode;
    let (title, action, switch_prompt, switch_label) = match mode {
        FormMode::SignIn => (
            "Sign in to continue",
            "Sign In",
            "Do not have an account? ",
            "Sign Up",
        ),
        FormMode::SignUp => (
            "Create an account to continue",
            "Sign Up",
            "Already have an account? ",
            "Sign In",
        ),
    };

    append(&document, &root, "h1", Some(title))?;

    let email = input(&document, &root, "email", "Enter your email or username", MAX_EMAIL_LEN)?;
    let email_error = append(&document, &root, "p", None)?;
    let password = input(&document, &root, "password", "Enter your password", MAX_PASSWORD_LEN)?;

    let repeat_password = if mode == FormMode::SignUp {
        Some(input(
            &document,
            &root,
            "password",
            "Enter your password again",
            MAX_PASSWORD_LEN,
        )?)
    } else {
        None
    };
    let password_error = append(&document, &root, "p", None)?;
    let submit_error = append(&document, &root, "p", None)?;

    {
        let form = form.clone();
        let field = email.clone();
        let email_error = email_error.clone();
        let submit_error = submit_error.clone();
        on_input(&email, move || {
            let mut form = form.borrow_mut();
            form.set_email(&field.value());
            field.set_value(&form.email);
            email_error.set_text_content(form.email_error);
            submit_error.set_text_content(None);
        });
    }
    {
        let form = form.clone();
        let field = password.clone();
        let password_error = password_error.clone();
        let submit_error = submit_error.clone();
        on_input(&password, move || {
            let mut form = form.borrow_mut();
            form.set_password(&field.value());
            field.set_value(&form.password);
            password_error.set_text_content(None);
            submit_error.set_text_content(None);
        });
    }
    if let Some(repeat_password) = &repeat_password {
        let form = form.clone();
        let field = repeat_password.clone();
        let password_error = password_error.clone();
        on_input(repeat_password, move || {
            let mut form = form.borrow_mut();
            form.set_repeat_password(&field.value());
            field.set_value(&form.repeat_password);
            password_error.set_text_content(form.password_error);
        });
    }

    let submit = append(&document, &root, "button", Some(action))?;
    {
        let form = form.clone();
        on_click(&submit, move || {
            let result = browser_store().and_then(|store| {
                let outcome = form.borrow_mut().submit(&store);
                match outcome {
                    Ok(user) => render_page_feed(Some(user)),
                    Err(err) => {
                        submit_error.set_text_content(Some(&err.to_string()));
                        Ok(())
                    }
                }
            });
            report(result);
        })?;
    }

    append(&document, &root, "span", Some(switch_prompt))?;
    let switch = append(&document, &root, "button", Some(switch_label))?;
    on_click(&switch, move || {
        form.borrow_mut().switch_mode();
        report(render_login_form(form.clone()));
    })?;

    Ok(())
}

pub fn render_page_login() -> Result<(), JsValue> {
    render_login_form(Rc::new(RefCell::new(LoginForm::new())))
}
