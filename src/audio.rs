use std::{fs::File, io::BufReader, io::Cursor, io::Read, sync::Arc};

use log::{info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

/// First readable file among `paths`.
fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| load_bytes(p))
}

/// Sound effects. Everything here is optional: without an output device or
/// a sound file the game simply stays silent.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    jump: Option<Arc<Vec<u8>>>,
    jump_volume: f32,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("No audio output available: {}", e);
                return None;
            }
        };
        Some(Self {
            _stream,
            handle,
            jump: None,
            jump_volume: 0.6,
        })
    }

    pub fn load_jump(&mut self, paths: &[&str]) {
        self.jump = load_bytes_any(paths).map(Arc::new);
        match &self.jump {
            Some(b) => info!("Loaded jump sound ({} bytes)", b.len()),
            None => warn!("No jump sound found in {:?}", paths),
        }
    }

    pub fn play_jump(&self) {
        // own sink per effect so rapid jumps overlap instead of queueing
        let Some(d) = self.jump.clone() else { return };
        if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec.amplify(self.jump_volume.clamp(0.0, 2.0)));
                sink.detach();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_bytes_any_skips_missing_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"RIFF").unwrap();
        let present = file.path().to_str().unwrap();

        let bytes = load_bytes_any(&["/definitely/not/here.wav", present]).unwrap();
        assert_eq!(bytes, b"RIFF");
    }

    #[test]
    fn load_bytes_any_none_when_nothing_exists() {
        assert!(load_bytes_any(&["/definitely/not/here.wav"]).is_none());
        assert!(load_bytes_any(&[]).is_none());
    }
}
