//! Frame ordering at the end of a sequence

use crate::config::PlaybackMode;

/// Iterator over frame indices in display order.
///
/// `loop` restarts from the first frame, `reflect` turns around at either
/// end without showing the turning frame twice, `once` stops after the
/// last frame. `turns` bounds how many restarts or reversals happen.
#[derive(Debug, Clone)]
pub struct Playback {
    len: usize,
    mode: PlaybackMode,
    next: Option<usize>,
    forward: bool,
    turns_left: usize,
}

impl Playback {
    pub fn new(len: usize, mode: PlaybackMode, turns: usize) -> Self {
        Self {
            len,
            mode,
            next: (len > 0).then_some(0),
            forward: true,
            turns_left: turns,
        }
    }

    fn take_turn(&mut self) -> bool {
        if self.turns_left == 0 || (self.len < 2 && self.mode == PlaybackMode::Reflect) {
            return false;
        }
        self.turns_left -= 1;
        true
    }

    fn advance(&mut self, current: usize) -> Option<usize> {
        if self.forward {
            if current + 1 < self.len {
                return Some(current + 1);
            }
            match self.mode {
                PlaybackMode::Once => None,
                PlaybackMode::Loop => self.take_turn().then_some(0),
                PlaybackMode::Reflect => {
                    if !self.take_turn() {
                        return None;
                    }
                    self.forward = false;
                    Some(current - 1)
                }
            }
        } else if current > 0 {
            Some(current - 1)
        } else {
            if !self.take_turn() {
                return None;
            }
            self.forward = true;
            Some(1)
        }
    }
}

impl Iterator for Playback {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(len: usize, mode: PlaybackMode, turns: usize) -> Vec<usize> {
        Playback::new(len, mode, turns).collect()
    }

    #[test]
    fn test_once_stops_after_last_frame() {
        assert_eq!(order(4, PlaybackMode::Once, 3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_loop_restarts_from_first_frame() {
        assert_eq!(order(3, PlaybackMode::Loop, 1), vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(order(2, PlaybackMode::Loop, 2), vec![0, 1, 0, 1, 0, 1]);
        assert_eq!(order(3, PlaybackMode::Loop, 0), vec![0, 1, 2]);
    }

    #[test]
    fn test_reflect_reverses_at_the_ends() {
        assert_eq!(order(3, PlaybackMode::Reflect, 1), vec![0, 1, 2, 1, 0]);
        assert_eq!(order(3, PlaybackMode::Reflect, 2), vec![0, 1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_single_frame() {
        assert_eq!(order(1, PlaybackMode::Reflect, 4), vec![0]);
        assert_eq!(order(1, PlaybackMode::Loop, 2), vec![0, 0, 0]);
        assert!(order(0, PlaybackMode::Loop, 2).is_empty());
    }
}
