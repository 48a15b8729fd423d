use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Todo list state. Ids are never reused within one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two starter items the demo page opens with.
    pub fn demo() -> Self {
        let mut list = Self::new();
        list.add("Learn React");
        list.add("Build a Todo App");
        list
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Append a new item. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
        });
        debug!("Added todo {} '{}'", id, text);
        Some(id)
    }

    /// Flip the completed flag. Returns false for an unknown id.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Delete an item. Returns false for an unknown id.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
