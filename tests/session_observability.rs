use std::sync::{Arc, Mutex};

use tabular_intake::{
    CompositeObserver, FileInput, SessionConfig, SessionObserver, StdErrObserver, UploadSession,
    UploadedFile,
};

#[derive(Default)]
struct RecordingObserver {
    ready_files: Mutex<Vec<String>>,
    failed_files: Mutex<Vec<String>>,
    ready_set_sizes: Mutex<Vec<usize>>,
}

impl SessionObserver for RecordingObserver {
    fn on_file_ready(&self, file: &UploadedFile) {
        self.ready_files.lock().unwrap().push(file.name.clone());
    }

    fn on_file_failed(&self, file: &UploadedFile) {
        self.failed_files.lock().unwrap().push(file.name.clone());
    }

    fn on_ready_set_changed(&self, ready: &[&UploadedFile]) {
        self.ready_set_sizes.lock().unwrap().push(ready.len());
    }
}

fn good_csv(name: &str) -> FileInput {
    FileInput::new(name, Some("text/csv"), b"a,b\n1,2\n".to_vec())
}

fn bad_json(name: &str) -> FileInput {
    FileInput::new(name, Some("application/json"), b"{not json".to_vec())
}

#[test]
fn observer_receives_on_file_ready_per_successful_file() {
    let obs = Arc::new(RecordingObserver::default());
    let mut session = UploadSession::new(SessionConfig::default()).with_observer(obs.clone());

    session.accept(vec![good_csv("one.csv"), good_csv("two.csv"), bad_json("bad.json")]);

    let ready = obs.ready_files.lock().unwrap().clone();
    assert_eq!(ready, vec!["one.csv", "two.csv"]);
    assert_eq!(obs.failed_files.lock().unwrap().as_slice(), ["bad.json"]);
    assert_eq!(obs.ready_set_sizes.lock().unwrap().last(), Some(&2));
}

#[test]
fn composite_fans_out_to_every_observer() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn SessionObserver>> =
        vec![first.clone(), second.clone(), Arc::new(StdErrObserver)];
    let composite = Arc::new(CompositeObserver::new(observers));

    let mut session = UploadSession::new(SessionConfig::default()).with_observer(composite);
    session.accept(vec![good_csv("good.csv"), bad_json("bad.json")]);

    for obs in [&first, &second] {
        assert_eq!(obs.ready_files.lock().unwrap().as_slice(), ["good.csv"]);
        assert_eq!(obs.failed_files.lock().unwrap().as_slice(), ["bad.json"]);
        assert_eq!(obs.ready_set_sizes.lock().unwrap().as_slice(), [1]);
    }
}

#[test]
fn empty_composite_is_inert() {
    let composite = Arc::new(CompositeObserver::default());
    let mut session = UploadSession::new(SessionConfig::default()).with_observer(composite);

    let ids = session.accept(vec![good_csv("one.csv")]);
    assert!(session.file(&ids[0]).unwrap().is_ready());
}
