use std::borrow::Cow;

use serde_json::json;

use crate::mime;
use crate::{
    MultipartFormData, MultipartFormDataError, MultipartFormDataField, MultipartFormDataOptions,
};

pub const DEFAULT_COMPATIBILITY_DATE: &str = "2024-07-01";

const METADATA_FIELD_NAME: &str = "metadata";
const SCRIPT_FILE_NAME: &str = "worker.js";

/// How the Workers runtime should load an uploaded script.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WorkerScriptFormat {
    /// An ES module. Its part is named after the module file.
    Module,
    /// A service-worker script using `addEventListener`. Its part is named `script`.
    Classic,
}

impl WorkerScriptFormat {
    /// The name of the part that carries the script.
    #[inline]
    pub fn script_field_name(self) -> &'static str {
        match self {
            WorkerScriptFormat::Module => SCRIPT_FILE_NAME,
            WorkerScriptFormat::Classic => "script",
        }
    }
}

/// The form for uploading a script to the Cloudflare Workers API: a JSON `metadata` part followed by the script as a file part.
#[derive(Debug, Clone)]
pub struct WorkerScriptUpload<'a> {
    pub format:             WorkerScriptFormat,
    pub script:             Cow<'a, str>,
    pub compatibility_date: Cow<'a, str>,
}

impl<'a> WorkerScriptUpload<'a> {
    #[inline]
    pub fn module<S: Into<Cow<'a, str>>>(script: S) -> WorkerScriptUpload<'a> {
        WorkerScriptUpload {
            format:             WorkerScriptFormat::Module,
            script:             script.into(),
            compatibility_date: Cow::Borrowed(DEFAULT_COMPATIBILITY_DATE),
        }
    }

    #[inline]
    pub fn classic<S: Into<Cow<'a, str>>>(script: S) -> WorkerScriptUpload<'a> {
        WorkerScriptUpload {
            format:             WorkerScriptFormat::Classic,
            script:             script.into(),
            compatibility_date: Cow::Borrowed(DEFAULT_COMPATIBILITY_DATE),
        }
    }

    #[inline]
    pub fn compatibility_date<S: Into<Cow<'a, str>>>(mut self, date: S) -> WorkerScriptUpload<'a> {
        self.compatibility_date = date.into();
        self
    }

    /// The JSON document sent in the `metadata` part.
    pub fn metadata(&self) -> String {
        let metadata = match self.format {
            WorkerScriptFormat::Module => json!({
                "main_module": SCRIPT_FILE_NAME,
                "compatibility_date": self.compatibility_date,
            }),
            WorkerScriptFormat::Classic => json!({
                "body_part": self.format.script_field_name(),
                "compatibility_date": self.compatibility_date,
            }),
        };

        metadata.to_string()
    }

    pub fn fields(&self) -> Vec<MultipartFormDataField<'_>> {
        vec![
            MultipartFormDataField::text(METADATA_FIELD_NAME, self.metadata())
                .content_type(Some(mime::APPLICATION_JSON)),
            MultipartFormDataField::file(
                self.format.script_field_name(),
                SCRIPT_FILE_NAME,
                self.script.as_bytes(),
            )
            .content_type(Some(mime::APPLICATION_JAVASCRIPT)),
        ]
    }

    #[inline]
    pub fn encode(
        &self,
        options: &MultipartFormDataOptions,
    ) -> Result<MultipartFormData, MultipartFormDataError> {
        MultipartFormData::encode_with_options(&self.fields(), options)
    }
}
