use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRef;
use crate::forms::schema::{FieldSpec, FormSchema, Record};
use crate::remote::input::{Connect, SetField};

/// An album as the remote service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub label: String,
    pub year: i64,
    pub artist: CatalogRef,
    pub genre: CatalogRef,
}

// ---- Field constraints ----

pub fn create_album_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::text("name", 1, 255),
        FieldSpec::text("artist", 1, 255),
        FieldSpec::text("genre", 1, 255),
        FieldSpec::text("recordLabel", 1, 255),
        FieldSpec::int("year", 1900, 2021),
        FieldSpec::text("years", 1, 255).optional(),
    ])
}

pub fn update_album_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::text("id", 1, 255),
        FieldSpec::text("name", 1, 255),
        FieldSpec::text("artist", 1, 255),
        FieldSpec::text("genre", 1, 255),
        FieldSpec::text("recordLabel", 1, 255),
        FieldSpec::int("year", 1900, 2021),
        FieldSpec::text("years", 1, 255).optional(),
    ])
}

pub fn delete_album_schema() -> FormSchema {
    FormSchema::new(vec![FieldSpec::text("id", 1, 255)])
}

// ---- Validated inputs ----

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAlbumInput {
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub record_label: String,
    pub year: i64,
}

impl CreateAlbumInput {
    pub fn from_record(record: &Record) -> color_eyre::Result<Self> {
        Ok(Self {
            name: record.str_field("name")?.to_string(),
            artist: record.str_field("artist")?.to_string(),
            genre: record.str_field("genre")?.to_string(),
            record_label: record.str_field("recordLabel")?.to_string(),
            year: record.int_field("year")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAlbumInput {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub record_label: String,
    pub year: i64,
}

impl UpdateAlbumInput {
    pub fn from_record(record: &Record) -> color_eyre::Result<Self> {
        Ok(Self {
            id: record.str_field("id")?.to_string(),
            name: record.str_field("name")?.to_string(),
            artist: record.str_field("artist")?.to_string(),
            genre: record.str_field("genre")?.to_string(),
            record_label: record.str_field("recordLabel")?.to_string(),
            year: record.int_field("year")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAlbumInput {
    pub id: String,
}

impl DeleteAlbumInput {
    pub fn from_record(record: &Record) -> color_eyre::Result<Self> {
        Ok(Self {
            id: record.str_field("id")?.to_string(),
        })
    }
}

// ---- Outgoing payload shapes ----

/// Create payload: scalars pass through, references become connect-by-id.
/// The remote schema keeps a `members` column mirroring the album name.
#[derive(Debug, Serialize)]
pub struct AlbumCreateData {
    pub artist: Connect,
    pub genre: Connect,
    pub name: String,
    pub label: String,
    pub year: i64,
    pub members: String,
}

impl From<&CreateAlbumInput> for AlbumCreateData {
    fn from(input: &CreateAlbumInput) -> Self {
        Self {
            artist: Connect::by_id(&*input.artist),
            genre: Connect::by_id(&*input.genre),
            name: input.name.clone(),
            label: input.record_label.clone(),
            year: input.year,
            members: input.name.clone(),
        }
    }
}

/// Update payload: every mutable scalar is wrapped in an explicit set
/// directive so fields the payload omits stay untouched remotely.
#[derive(Debug, Serialize)]
pub struct AlbumUpdateData {
    pub artist: Connect,
    pub genre: Connect,
    pub name: SetField<String>,
    pub label: SetField<String>,
    pub year: SetField<i64>,
    pub members: SetField<String>,
}

impl From<&UpdateAlbumInput> for AlbumUpdateData {
    fn from(input: &UpdateAlbumInput) -> Self {
        Self {
            artist: Connect::by_id(&*input.artist),
            genre: Connect::by_id(&*input.genre),
            name: SetField::to(input.name.clone()),
            label: SetField::to(input.record_label.clone()),
            year: SetField::to(input.year),
            members: SetField::to(input.name.clone()),
        }
    }
}
