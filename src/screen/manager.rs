//! Stack of screens with lifecycle notifications
//!
//! The manager owns every screen pushed onto it. The active screen is always
//! the top of the stack; the ones below it are paused until uncovered.
//!
//! Borrows returned by [`ScreenManager::push`] and [`ScreenManager::top_mut`]
//! are only valid until the next call that mutates the stack.

use super::{Screen, Transition};
use log::debug;

pub struct ScreenManager<'a> {
    screens: Vec<Box<dyn Screen<'a> + 'a>>,
}

impl<'a> ScreenManager<'a> {
    /// Creates an empty manager
    pub fn new() -> Self {
        ScreenManager {
            screens: Vec::new(),
        }
    }

    /// Pushes `screen` on top of the stack and makes it active
    ///
    /// The previously active screen (if any) is paused first, then the new
    /// screen is entered.
    pub fn push<T>(&mut self, screen: T) -> &mut (dyn Screen<'a> + 'a)
    where
        T: Screen<'a> + 'a,
    {
        self.push_boxed(Box::new(screen))
    }

    /// Same as [`push`](Self::push) for an already boxed screen
    pub fn push_boxed(&mut self, screen: Box<dyn Screen<'a> + 'a>) -> &mut (dyn Screen<'a> + 'a) {
        if let Some(current) = self.screens.last_mut() {
            current.pause();
        }

        let index = self.screens.len();
        self.screens.push(screen);
        debug!("[ScreenManager] Push '{}' (depth {})", self.screens[index].name(), index + 1);

        let top = &mut self.screens[index];
        top.enter();
        &mut **top
    }

    /// Removes the active screen and resumes the one below it
    ///
    /// Does nothing when the stack is empty.
    pub fn pop(&mut self) {
        let Some(mut screen) = self.screens.pop() else {
            return;
        };

        // exit runs before the next screen is resumed
        screen.exit();
        debug!("[ScreenManager] Pop '{}' (depth {})", screen.name(), self.screens.len());
        drop(screen);

        if let Some(next) = self.screens.last_mut() {
            next.resume();
        }
    }

    /// Pops every screen, top first
    pub fn clear(&mut self) {
        while !self.empty() {
            self.pop();
        }
    }

    /// The active screen, `None` when the stack is empty
    pub fn top(&self) -> Option<&(dyn Screen<'a> + 'a)> {
        self.screens.last().map(|screen| &**screen)
    }

    /// Mutable access to the active screen
    pub fn top_mut(&mut self) -> Option<&mut (dyn Screen<'a> + 'a)> {
        self.screens.last_mut().map(|screen| &mut **screen)
    }

    /// Number of screens on the stack
    pub fn size(&self) -> usize {
        self.screens.len()
    }

    pub fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Carries out a transition requested by the active screen
    ///
    /// Returns `false` when the client should stop: on `Transition::Quit` or
    /// once the last screen has been popped.
    pub fn apply(&mut self, transition: Transition<'a>) -> bool {
        match transition {
            Transition::None => {}
            Transition::Push(screen) => {
                self.push_boxed(screen);
            }
            Transition::Pop => self.pop(),
            Transition::Quit => return false,
        }

        !self.empty()
    }
}

impl Default for ScreenManager<'_> {
    fn default() -> Self {
        Self::new()
    }
}
