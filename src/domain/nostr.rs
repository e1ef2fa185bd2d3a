mod event;

pub use event::{
    decode_secret_key, ensure_verified, seal_entries, sign_content, verify, FORM_EVENT_KIND,
};
