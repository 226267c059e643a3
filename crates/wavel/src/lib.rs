pub mod wavel;

pub use wavel::{
    ChatOps, ContactOps, HttpTransport, Identifier, MediaKind, MediaOps, MediaPayload, Output,
    RequestEnvelope, RequestPipeline, Transport, VCard, Wavel, WavelConfig, WavelError,
    WavelErrorCode, WavelResult,
};
