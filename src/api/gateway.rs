use std::{fs::File, io, path::Path};

use reqwest::{
    blocking::{
        multipart::{Form, Part},
        Client, RequestBuilder,
    },
    header::AUTHORIZATION,
};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.modrinth.com";

/// The raw HTTP surface the Modrinth client talks through.
///
/// Paths are relative to the API root, eg. `/v2/project/sodium`.
pub trait Gateway {
    fn get(&self, path: &str) -> Result<Value>;

    fn post(&self, path: &str, body: Upload) -> Result<Value>;
}

/// A multipart body: one json `data` part followed by a part per file.
#[derive(Debug)]
pub struct Upload {
    pub data: Value,
    pub files: Vec<UploadFile>,
}

/// A file opened for upload. The handle is closed when this is dropped.
#[derive(Debug)]
pub struct UploadFile {
    pub part_name: String,
    pub file_name: String,
    pub file: File,
}

impl UploadFile {
    pub fn open(path: &Path) -> Result<Self> {
        let access_error = |source| Error::FileAccess { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(access_error)?;
        // directories open fine on unix but fail once the body is being sent
        if !file.metadata().map_err(access_error)?.is_file() {
            return Err(access_error(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file")));
        }

        Ok(UploadFile {
            part_name: path.to_string_lossy().into_owned(),
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            file,
        })
    }
}

pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    // user agent: https://docs.modrinth.com/#section/User-Agents
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpGateway {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn fetch(&self, req: RequestBuilder) -> Result<Value> {
        // an empty token means anonymous access
        let req = match self.token.is_empty() {
            true => req,
            false => req.header(AUTHORIZATION, &self.token),
        };

        let res = req.send()?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text()?;
            let body = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::String(text));
            debug!(%status, %body, "HTTP error response");
            return Err(Error::Api { status, body });
        }

        Ok(res.json()?)
    }
}

impl Gateway for HttpGateway {
    fn get(&self, path: &str) -> Result<Value> {
        debug!(path, "GET");
        self.fetch(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str, body: Upload) -> Result<Value> {
        debug!(path, parts = body.files.len() + 1, "POST multipart");
        let mut form = Form::new().part(
            "data",
            Part::text(body.data.to_string()).mime_str("application/json")?,
        );

        for upload in body.files {
            let len = upload.file.metadata()?.len();
            let part = Part::reader_with_length(upload.file, len).file_name(upload.file_name);
            form = form.part(upload.part_name, part);
        }

        self.fetch(self.client.post(self.url(path)).multipart(form))
    }
}

#[cfg(test)]
pub mod fake {
    use std::{cell::RefCell, collections::HashMap, io::Read};

    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::{Gateway, Upload};
    use crate::error::{Error, Result};

    /// What a recorded multipart post carried.
    #[derive(Debug)]
    pub struct Posted {
        pub path: String,
        pub data: Value,
        /// (part name, file name, contents)
        pub files: Vec<(String, String, Vec<u8>)>,
    }

    /// Answers from a fixed route table and records every call in order.
    /// Unknown routes answer 404 like the real api does.
    #[derive(Default)]
    pub struct FakeGateway {
        routes: HashMap<String, (StatusCode, Value)>,
        calls: RefCell<Vec<String>>,
        pub posted: RefCell<Vec<Posted>>,
    }

    impl FakeGateway {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn route(mut self, path: &str, body: Value) -> Self {
            self.routes.insert(path.to_owned(), (StatusCode::OK, body));
            self
        }

        pub fn failing(mut self, path: &str, status: StatusCode, body: Value) -> Self {
            self.routes.insert(path.to_owned(), (status, body));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn respond(&self, path: &str) -> Result<Value> {
            match self.routes.get(path) {
                Some((status, body)) if status.is_success() => Ok(body.clone()),
                Some((status, body)) => Err(Error::Api { status: *status, body: body.clone() }),
                None => Err(Error::Api {
                    status: StatusCode::NOT_FOUND,
                    body: json!({ "error": "not_found", "description": "the requested route does not exist" }),
                }),
            }
        }
    }

    impl Gateway for FakeGateway {
        fn get(&self, path: &str) -> Result<Value> {
            self.calls.borrow_mut().push(format!("GET {path}"));
            self.respond(path)
        }

        fn post(&self, path: &str, body: Upload) -> Result<Value> {
            self.calls.borrow_mut().push(format!("POST {path}"));

            let mut files = Vec::new();
            for mut upload in body.files {
                let mut contents = Vec::new();
                upload.file.read_to_end(&mut contents)?;
                files.push((upload.part_name, upload.file_name, contents));
            }

            self.posted.borrow_mut().push(Posted { path: path.to_owned(), data: body.data, files });
            self.respond(path)
        }
    }
}
