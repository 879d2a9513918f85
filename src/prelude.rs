pub use std::{
    collections::{BTreeMap, HashMap},
    env,
    fmt::Display,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

pub use anyhow::{anyhow, Context};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{debug, error, info};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
