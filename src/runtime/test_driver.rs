use std::cell::{Cell, RefCell};

use fnv::FnvHashMap;

use crate::runtime::Driver;
use crate::version::Version;

/// A [Driver] that records the calls made to it.
///
/// Compilation fails for any shader whose sources contain a line starting with `#error`; every
/// `#error` and `#warning` line ends up in the info log.
pub(crate) struct TestDriver {
    version: Version,
    advertised: Vec<String>,
    integers: FnvHashMap<u32, i32>,
    integer_queries: RefCell<FnvHashMap<u32, usize>>,
    shaders: RefCell<FnvHashMap<u32, TestShader>>,
    next_id: Cell<u32>,
    fail_create: bool,
    nul_terminated_logs: bool,
    calls: RefCell<Vec<Call>>,
}

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Call {
    CreateShader(u32),
    ShaderSource(u32),
    CompileShader(u32),
    CompileStatus(u32),
    DeleteShader(u32),
}

#[derive(Clone, Default, Debug)]
pub(crate) struct TestShader {
    pub kind: u32,
    pub sources: Vec<String>,
    pub compiled: Option<bool>,
    pub info_log: String,
    pub label: String,
    pub deleted: bool,
}

impl TestDriver {
    pub(crate) fn new(version: Version) -> Self {
        TestDriver {
            version,
            advertised: Vec::new(),
            integers: FnvHashMap::default(),
            integer_queries: RefCell::new(FnvHashMap::default()),
            shaders: RefCell::new(FnvHashMap::default()),
            next_id: Cell::new(1),
            fail_create: false,
            nul_terminated_logs: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn advertise(mut self, name: &str) -> Self {
        self.advertised.push(name.to_string());

        self
    }

    pub(crate) fn integer(mut self, pname: u32, value: i32) -> Self {
        self.integers.insert(pname, value);

        self
    }

    pub(crate) fn fail_create(mut self) -> Self {
        self.fail_create = true;

        self
    }

    pub(crate) fn nul_terminated_logs(mut self) -> Self {
        self.nul_terminated_logs = true;

        self
    }

    /// How often `pname` was queried with [Driver::get_integer].
    pub(crate) fn query_count(&self, pname: u32) -> usize {
        self.integer_queries
            .borrow()
            .get(&pname)
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn total_query_count(&self) -> usize {
        self.integer_queries.borrow().values().sum()
    }

    pub(crate) fn shader(&self, id: u32) -> TestShader {
        self.shaders.borrow()[&id].clone()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Driver for TestDriver {
    type Shader = u32;

    fn context_version(&self) -> Version {
        self.version
    }

    fn supported_extensions(&self) -> Vec<String> {
        self.advertised.clone()
    }

    fn get_integer(&self, pname: u32) -> i32 {
        *self.integer_queries.borrow_mut().entry(pname).or_insert(0) += 1;

        self.integers.get(&pname).copied().unwrap_or(0)
    }

    fn create_shader(&self, kind: u32) -> Option<u32> {
        self.record(Call::CreateShader(kind));

        if self.fail_create {
            return None;
        }

        let id = self.next_id.get();

        self.next_id.set(id + 1);
        self.shaders.borrow_mut().insert(
            id,
            TestShader {
                kind,
                ..TestShader::default()
            },
        );

        Some(id)
    }

    fn shader_source(&self, shader: &u32, sources: &[&str]) {
        self.record(Call::ShaderSource(*shader));

        let mut shaders = self.shaders.borrow_mut();
        let entry = shaders.get_mut(shader).expect("unknown shader");

        entry.sources = sources.iter().map(|s| s.to_string()).collect();
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(Call::CompileShader(*shader));

        let mut shaders = self.shaders.borrow_mut();
        let entry = shaders.get_mut(shader).expect("unknown shader");
        let mut success = true;
        let mut info_log = String::new();

        for line in entry.sources.concat().lines() {
            let line = line.trim();

            if line.starts_with("#error") {
                success = false;
                info_log.push_str(&format!("ERROR: {}\n", line["#error".len()..].trim()));
            } else if line.starts_with("#warning") {
                info_log.push_str(&format!("WARNING: {}\n", line["#warning".len()..].trim()));
            }
        }

        entry.compiled = Some(success);
        entry.info_log = info_log;
    }

    fn compile_status(&self, shader: &u32) -> bool {
        self.record(Call::CompileStatus(*shader));

        self.shaders.borrow()[shader].compiled.unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &u32) -> String {
        let mut log = self.shaders.borrow()[shader].info_log.clone();

        if self.nul_terminated_logs {
            log.push('\0');
        }

        log
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));

        let mut shaders = self.shaders.borrow_mut();
        let entry = shaders.get_mut(shader).expect("unknown shader");

        assert!(!entry.deleted, "shader {} deleted twice", shader);

        entry.deleted = true;
    }

    fn object_label(&self, _identifier: u32, shader: &u32, label: &str) {
        let mut shaders = self.shaders.borrow_mut();

        if let Some(entry) = shaders.get_mut(shader) {
            entry.label = label.to_string();
        }
    }

    fn get_object_label(&self, _identifier: u32, shader: &u32) -> String {
        self.shaders.borrow()[shader].label.clone()
    }
}
