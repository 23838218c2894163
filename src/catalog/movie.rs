use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRef;
use crate::forms::schema::{FieldSpec, FormSchema, Record};
use crate::remote::input::{Connect, SetField};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: i64,
    pub synopsis: Option<String>,
    pub cast: Option<String>,
    pub genre: CatalogRef,
}

// ---- Field constraints ----

pub fn create_movie_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::text("title", 1, 255),
        FieldSpec::text("director", 1, 255),
        FieldSpec::text("genre", 1, 255),
        FieldSpec::int("year", 1900, 2021),
        FieldSpec::text("synopsis", 1, 1000).optional(),
        FieldSpec::text("cast", 1, 255).optional(),
    ])
}

pub fn update_movie_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::text("id", 1, 255),
        FieldSpec::text("title", 1, 255),
        FieldSpec::text("director", 1, 255),
        FieldSpec::text("genre", 1, 255),
        FieldSpec::int("year", 1900, 2021),
        FieldSpec::text("synopsis", 1, 1000).optional(),
        FieldSpec::text("cast", 1, 255).optional(),
    ])
}

pub fn delete_movie_schema() -> FormSchema {
    FormSchema::new(vec![FieldSpec::text("id", 1, 255)])
}

// ---- Validated inputs ----

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMovieInput {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i64,
    pub synopsis: Option<String>,
    pub cast: Option<String>,
}

impl CreateMovieInput {
    pub fn from_record(record: &Record) -> color_eyre::Result<Self> {
        Ok(Self {
            title: record.str_field("title")?.to_string(),
            director: record.str_field("director")?.to_string(),
            genre: record.str_field("genre")?.to_string(),
            year: record.int_field("year")?,
            synopsis: record.opt_str_field("synopsis").map(str::to_string),
            cast: record.opt_str_field("cast").map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMovieInput {
    pub id: String,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i64,
    pub synopsis: Option<String>,
    pub cast: Option<String>,
}

impl UpdateMovieInput {
    pub fn from_record(record: &Record) -> color_eyre::Result<Self> {
        Ok(Self {
            id: record.str_field("id")?.to_string(),
            title: record.str_field("title")?.to_string(),
            director: record.str_field("director")?.to_string(),
            genre: record.str_field("genre")?.to_string(),
            year: record.int_field("year")?,
            synopsis: record.opt_str_field("synopsis").map(str::to_string),
            cast: record.opt_str_field("cast").map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteMovieInput {
    pub id: String,
}

impl DeleteMovieInput {
    pub fn from_record(record: &Record) -> color_eyre::Result<Self> {
        Ok(Self {
            id: record.str_field("id")?.to_string(),
        })
    }
}

// ---- Outgoing payload shapes ----

/// Optional fields the user left blank are skipped entirely, not sent as
/// null, so the remote service applies its own defaults.
#[derive(Debug, Serialize)]
pub struct MovieCreateData {
    pub genre: Connect,
    pub title: String,
    pub director: String,
    pub year: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
}

impl From<&CreateMovieInput> for MovieCreateData {
    fn from(input: &CreateMovieInput) -> Self {
        Self {
            genre: Connect::by_id(&*input.genre),
            title: input.title.clone(),
            director: input.director.clone(),
            year: input.year,
            synopsis: input.synopsis.clone(),
            cast: input.cast.clone(),
        }
    }
}

/// Update payload: present fields wrapped in set directives, absent optional
/// fields omitted so the remote service leaves them untouched.
#[derive(Debug, Serialize)]
pub struct MovieUpdateData {
    pub genre: Connect,
    pub title: SetField<String>,
    pub director: SetField<String>,
    pub year: SetField<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<SetField<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<SetField<String>>,
}

impl From<&UpdateMovieInput> for MovieUpdateData {
    fn from(input: &UpdateMovieInput) -> Self {
        Self {
            genre: Connect::by_id(&*input.genre),
            title: SetField::to(input.title.clone()),
            director: SetField::to(input.director.clone()),
            year: SetField::to(input.year),
            synopsis: input.synopsis.clone().map(SetField::to),
            cast: input.cast.clone().map(SetField::to),
        }
    }
}
