#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{ActionError, DispatchResult, ModalInputController};
use core_input::KeyDecoder;
use core_text::TextBuffer;

/// Outcome of feeding a byte script through decoder + controller.
pub struct Session {
    pub controller: ModalInputController,
    pub buffer: TextBuffer,
    pub results: Vec<Result<DispatchResult, ActionError>>,
}

impl Session {
    pub fn text(&self) -> Vec<String> {
        self.buffer
            .lines()
            .iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|r| r.as_ref().err().map(ToString::to_string))
            .collect()
    }
}

/// Step until the script is exhausted or a quit is requested.
pub fn run_script(script: &[u8], buffer: TextBuffer) -> Session {
    let mut controller = ModalInputController::new();
    let mut decoder = KeyDecoder::new(script);
    let mut buffer = buffer;
    let mut results = Vec::new();
    loop {
        let result = controller.step(&mut decoder, &mut buffer);
        let quit = matches!(&result, Ok(r) if r.quit);
        results.push(result);
        if quit {
            break;
        }
    }
    Session {
        controller,
        buffer,
        results,
    }
}
