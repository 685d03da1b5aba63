//! Scripted in-memory host
//!
//! Plays the editor in tests: holds a set of open tabs, records every
//! request, and answers prompts from queues filled by the test.

use parking_lot::Mutex;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::error::HostError;
use crate::host::{InputBoxOptions, MessageLevel, Prompter, QuickPickItem, ShowOptions, TabHost};
use crate::tab::HostTab;
use crate::Result;

#[derive(Default)]
struct Script {
    open_tabs: Vec<HostTab>,
    active_tab: Option<HostTab>,
    unopenable: HashSet<String>,
    close_error: Option<String>,
    opened: Vec<(String, ShowOptions)>,
    closed: Vec<Vec<HostTab>>,
    inputs: VecDeque<Option<String>>,
    picks: VecDeque<Option<usize>>,
    confirmations: VecDeque<bool>,
    prompts: Vec<InputBoxOptions>,
    pick_lists: Vec<Vec<QuickPickItem>>,
    confirm_requests: Vec<(String, String)>,
    messages: Vec<(MessageLevel, String)>,
}

/// Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedHost {
    script: Arc<Mutex<Script>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open_tabs(&self, tabs: Vec<HostTab>) {
        self.script.lock().open_tabs = tabs;
    }

    pub fn set_active_tab(&self, tab: Option<HostTab>) {
        self.script.lock().active_tab = tab;
    }

    /// Opening `uri` will fail as if the file were gone
    pub fn make_unopenable(&self, uri: &str) {
        self.script.lock().unopenable.insert(uri.to_string());
    }

    pub fn fail_close(&self, reason: &str) {
        self.script.lock().close_error = Some(reason.to_string());
    }

    pub fn queue_input(&self, answer: Option<&str>) {
        self.script
            .lock()
            .inputs
            .push_back(answer.map(str::to_string));
    }

    pub fn queue_pick(&self, answer: Option<usize>) {
        self.script.lock().picks.push_back(answer);
    }

    pub fn queue_confirm(&self, answer: bool) {
        self.script.lock().confirmations.push_back(answer);
    }

    pub fn open_tab_list(&self) -> Vec<HostTab> {
        self.script.lock().open_tabs.clone()
    }

    pub fn opened(&self) -> Vec<(String, ShowOptions)> {
        self.script.lock().opened.clone()
    }

    pub fn closed(&self) -> Vec<Vec<HostTab>> {
        self.script.lock().closed.clone()
    }

    pub fn prompts(&self) -> Vec<InputBoxOptions> {
        self.script.lock().prompts.clone()
    }

    pub fn pick_lists(&self) -> Vec<Vec<QuickPickItem>> {
        self.script.lock().pick_lists.clone()
    }

    pub fn confirm_requests(&self) -> Vec<(String, String)> {
        self.script.lock().confirm_requests.clone()
    }

    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.script.lock().messages.clone()
    }

    pub fn messages_at(&self, level: MessageLevel) -> Vec<String> {
        self.script
            .lock()
            .messages
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl TabHost for ScriptedHost {
    fn open_tabs(&self) -> Vec<HostTab> {
        self.script.lock().open_tabs.clone()
    }

    fn active_tab(&self) -> Option<HostTab> {
        self.script.lock().active_tab.clone()
    }

    fn open_document(&self, uri: &str, options: ShowOptions) -> Result<()> {
        let mut script = self.script.lock();
        if script.unopenable.contains(uri) {
            return Err(HostError::OpenFailure {
                uri: uri.to_string(),
                reason: "file not found".to_string(),
            });
        }

        script.opened.push((uri.to_string(), options));

        let already_open = script
            .open_tabs
            .iter()
            .any(|tab| tab.input.text_uri() == Some(uri));
        if !already_open {
            let label = uri.rsplit('/').next().unwrap_or(uri).to_string();
            script.open_tabs.push(HostTab::text(uri, label));
        }

        Ok(())
    }

    fn close_tabs(&self, tabs: &[HostTab], _preserve_focus: bool) -> Result<()> {
        let mut script = self.script.lock();
        if let Some(reason) = script.close_error.clone() {
            return Err(HostError::CloseFailure(reason));
        }

        script.open_tabs.retain(|open| !tabs.contains(open));
        script.closed.push(tabs.to_vec());
        Ok(())
    }
}

impl Prompter for ScriptedHost {
    fn input_box(&self, options: &InputBoxOptions) -> Option<String> {
        let mut script = self.script.lock();
        script.prompts.push(options.clone());
        script.inputs.pop_front().flatten()
    }

    fn quick_pick(&self, items: &[QuickPickItem], _placeholder: &str) -> Option<usize> {
        let mut script = self.script.lock();
        script.pick_lists.push(items.to_vec());
        script
            .picks
            .pop_front()
            .flatten()
            .filter(|index| *index < items.len())
    }

    fn confirm(&self, message: &str, affirm_label: &str) -> bool {
        let mut script = self.script.lock();
        script
            .confirm_requests
            .push((message.to_string(), affirm_label.to_string()));
        script.confirmations.pop_front().unwrap_or(false)
    }

    fn notify(&self, level: MessageLevel, message: &str) {
        self.script
            .lock()
            .messages
            .push((level, message.to_string()));
    }
}
