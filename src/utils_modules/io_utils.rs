use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되어 파싱에 실패하는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = r#"
    Reads a JSON document from disk and deserializes it into `T`.

    The file is read on the async runtime; billing exports can be large and
    the caller is already inside a Tokio task.
"#]
pub async fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> anyhow::Result<T> {
    let json_content: String = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("[read_json_from_file] failed to read {:?}", file_path))?;

    let value: T = serde_json::from_str(&json_content)
        .with_context(|| format!("[read_json_from_file] failed to parse {:?}", file_path))?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn reads_toml_file() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("sample.toml");
        std::fs::write(&path, "name = \"a\"\ncount = 3\n").unwrap();

        let sample: Sample = read_toml_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(sample, Sample { name: "a".to_string(), count: 3 });
    }

    #[test]
    fn missing_toml_file_is_an_error() {
        let res: anyhow::Result<Sample> = read_toml_from_file("./does/not/exist.toml");
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn reads_json_file() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("sample.json");
        std::fs::write(&path, r#"[{"name":"b","count":7}]"#).unwrap();

        let samples: Vec<Sample> = read_json_from_file(&path).await.unwrap();
        assert_eq!(samples, vec![Sample { name: "b".to_string(), count: 7 }]);
    }
}
