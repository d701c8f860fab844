use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::Value;
use crate::books::dto::{BookDto, CreateBookDto, UpdateBookDto};
use crate::catalog::command::add_book_cmd::AddBookCommand;
use crate::catalog::command::book_report_cmd::{BookReportCommand, BookReportCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, bad_request, command_to_server_error, json_to_server_error, ServerError};

const MIN_ISBN_LENGTH: usize = 10;

pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
where
    B: axum::body::HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<axum::BoxError>,
{
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/report", get(book_report))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .with_state(state)
}

// parse_body rejects absent and null bodies before decoding the request shape
fn parse_body<T: serde::de::DeserializeOwned>(json: Option<Json<Value>>) -> Result<T, ServerError> {
    match json {
        Some(Json(value)) if !value.is_null() => {
            serde_json::from_value(value).map_err(json_to_server_error)
        }
        _ => Err(bad_request("Book data is required")),
    }
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::default()).await
        .map_err(|err| command_to_server_error(err, "Error retrieving books"))?;
    Ok(Json(res.books))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ServerError> {
    if isbn.is_empty() {
        return Err(bad_request("ISBN is required"));
    }
    let res = GetBookCommand::new(state.catalog_service).execute(GetBookCommandRequest::new(isbn.as_str())).await
        .map_err(|err| command_to_server_error(err, "Error retrieving book"))?;
    Ok(Json(res.book))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Option<Json<Value>>) -> Result<impl IntoResponse, ServerError> {
    let req: CreateBookDto = parse_body(json)?;
    if req.isbn.trim().is_empty() || req.title.trim().is_empty() {
        return Err(bad_request("ISBN and Title are required"));
    }
    if req.isbn.trim().chars().count() < MIN_ISBN_LENGTH {
        return Err(bad_request("Invalid ISBN format"));
    }
    let res = AddBookCommand::new(state.catalog_service).execute(req).await
        .map_err(|err| command_to_server_error(err, "Error creating book"))?;
    let location = format!("/books/{}", urlencoding::encode(res.book.isbn.as_str()));
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(res.book)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Option<Json<Value>>) -> Result<Json<BookDto>, ServerError> {
    if isbn.is_empty() {
        return Err(bad_request("ISBN is required"));
    }
    let book: UpdateBookDto = parse_body(json)?;
    let res = UpdateBookCommand::new(state.catalog_service).execute(UpdateBookCommandRequest::new(isbn.as_str(), book)).await
        .map_err(|err| command_to_server_error(err, "Error updating book"))?;
    Ok(Json(res.book))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    if isbn.is_empty() {
        return Err(bad_request("ISBN is required"));
    }
    let _ = RemoveBookCommand::new(state.catalog_service).execute(RemoveBookCommandRequest::new(isbn.as_str())).await
        .map_err(|err| command_to_server_error(err, "Error deleting book"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn book_report(
    State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let res = BookReportCommand::new(state.catalog_service).execute(BookReportCommandRequest::default()).await
        .map_err(|err| command_to_server_error(err, "Error generating report"))?;
    Ok(Html(res.html))
}
