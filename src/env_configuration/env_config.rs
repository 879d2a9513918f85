use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    1. 환경변수 `key`에 해당하는 값을 `env::var()`로 조회
    2. 값이 존재하면 해당 값을 문자열로 반환
    3. 값이 없으면 error 레벨로 로깅한 뒤 panic

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the TOML file holding `[system]`, `[report]` and `[chart]` settings.

    Read from `SERVER_CONFIG_PATH` on first access and cached afterwards.

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));
