use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::IconError;
use crate::render::raster::IconImage;

#[test]
fn default_set_is_the_three_app_icons() {
    let pairs: Vec<(&str, u32)> = DEFAULT_ICON_SET.iter().map(|s| (s.name, s.size)).collect();
    assert_eq!(
        pairs,
        [("32x32", 32), ("128x128", 128), ("128x128@2x", 256)]
    );
}

#[test]
fn generate_renders_each_spec_in_order() {
    let mut sink = InMemorySink::new();
    let written = generate_icon_set(&DEFAULT_ICON_SET, &mut sink).unwrap();

    assert_eq!(written.len(), 3);
    for (w, spec) in written.iter().zip(DEFAULT_ICON_SET.iter()) {
        assert_eq!(w.name, spec.name);
        assert_eq!(w.size.get(), spec.size);
    }
    for (name, img) in &sink.icons {
        let spec = DEFAULT_ICON_SET.iter().find(|s| s.name == name.as_str()).unwrap();
        assert_eq!((img.width, img.height), (spec.size, spec.size));
    }
}

#[test]
fn invalid_size_fails_before_saving_anything() {
    let specs = [IconSpec {
        name: "zero",
        size: 0,
    }];
    let mut sink = InMemorySink::new();
    let err = generate_icon_set(&specs, &mut sink).unwrap_err();
    assert!(matches!(err, IconError::Validation(_)));
    assert!(sink.icons.is_empty());
}

struct FailSecond {
    calls: usize,
}

impl IconSink for FailSecond {
    fn save(&mut self, name: &str, _image: &IconImage) -> IconResult<PathBuf> {
        self.calls += 1;
        if self.calls == 2 {
            return Err(IconError::io(
                name,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ));
        }
        Ok(PathBuf::from(name))
    }
}

#[test]
fn first_sink_failure_stops_the_run() {
    let mut sink = FailSecond { calls: 0 };
    let err = generate_icon_set(&DEFAULT_ICON_SET, &mut sink).unwrap_err();
    assert!(matches!(err, IconError::Io { .. }));
    assert_eq!(sink.calls, 2);
}
