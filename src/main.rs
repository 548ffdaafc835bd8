//! Jeomja - 한글 자모 분해 CLI
//!
//! 인자(또는 stdin)로 받은 한글을 자모 시퀀스로 분해해 출력

use jeomja::config::{load_config, OutputFormat};
use jeomja::{validate_and_decompose, DecomposeResponse};
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    // 입력: 인자가 있으면 공백으로 연결, 없으면 stdin 전체
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("입력 읽기 실패: {}", e);
            return ExitCode::FAILURE;
        }
        strip_trailing_newline(&buffer).to_string()
    } else {
        args.join(" ")
    };

    let result = validate_and_decompose(&text);

    if config.show_unsupported {
        if let Ok(decomposition) = &result {
            for skipped in &decomposition.unsupported {
                eprintln!("건너뛴 문자: {} (위치 {})", skipped.ch, skipped.index);
            }
        }
    }

    match config.output {
        OutputFormat::Json => {
            let response = DecomposeResponse::from(result);
            let valid = response.valid;
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("JSON 직렬화 실패: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        OutputFormat::Text => match result {
            Ok(decomposition) => {
                let line: Vec<String> =
                    decomposition.jamos.iter().map(|c| c.to_string()).collect();
                println!("{}", line.join(" "));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// 파이프 입력 끝에 붙는 개행 제거 (분해 대상이 아님)
fn strip_trailing_newline(buffer: &str) -> &str {
    buffer.trim_end_matches(['\n', '\r'])
}
