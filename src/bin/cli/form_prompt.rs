use anyhow::Result;
use bookform::{types::form::BookForm, view::SubmitMode};
use chrono::NaiveDate;
use crossterm::style::Stylize;
use inquire::{validator::Validation, InquireError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `Ok(None)` when the user pressed escape.
fn field(
    prompt: &str,
    initial: &str,
    validator: Option<fn(&str) -> Result<Validation, inquire::CustomUserError>>,
) -> Result<Option<String>> {
    let mut text = inquire::Text::new(prompt);
    if !initial.is_empty() {
        text = text.with_initial_value(initial);
    }
    if let Some(validator) = validator {
        text = text.with_validator(validator);
    }
    match text.prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn validator_date(input: &str) -> Result<Validation, inquire::CustomUserError> {
    if input.trim().is_empty() || NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).is_ok() {
        return Ok(Validation::Valid);
    }
    Ok(Validation::Invalid(
        inquire::validator::ErrorMessage::Custom("Expected a date like 2023-04-01".to_string()),
    ))
}

macro_rules! ask {
    ($prompt:expr, $initial:expr) => {
        ask!($prompt, $initial, None)
    };
    ($prompt:expr, $initial:expr, $validator:expr) => {
        match field($prompt, $initial, $validator)? {
            Some(value) => value,
            None => return Ok(None),
        }
    };
}

/// Walks through every form field, starting from `initial`. Values are
/// passed on as typed; checking them is up to the controller.
pub fn prompt_form(initial: &BookForm, mode: SubmitMode) -> Result<Option<BookForm>> {
    println!("{}", mode.to_string().bold());
    let title = ask!("Title:", &initial.title);
    let author = ask!("Author:", &initial.author);
    let isbn = ask!("ISBN:", &initial.isbn);
    let price = ask!("Price:", &initial.price);
    let publish_date = ask!(
        "Publish date (YYYY-MM-DD):",
        &initial.publish_date,
        Some(validator_date)
    );

    let has_detail = [
        &initial.description,
        &initial.language,
        &initial.page_count,
        &initial.publisher,
        &initial.cover_image_url,
        &initial.edition,
    ]
    .iter()
    .any(|x| !x.is_empty());
    let edit_detail = match inquire::Confirm::new("Edit details?")
        .with_default(has_detail)
        .prompt()
    {
        Ok(answer) => answer,
        Err(InquireError::OperationCanceled) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if !edit_detail {
        return Ok(Some(BookForm {
            title,
            author,
            isbn,
            price,
            publish_date,
            ..initial.clone()
        }));
    }

    Ok(Some(BookForm {
        title,
        author,
        isbn,
        price,
        publish_date,
        description: ask!("Description:", &initial.description),
        language: ask!("Language:", &initial.language),
        page_count: ask!("Page count:", &initial.page_count),
        publisher: ask!("Publisher:", &initial.publisher),
        cover_image_url: ask!("Cover image URL:", &initial.cover_image_url),
        edition: ask!("Edition:", &initial.edition),
    }))
}
