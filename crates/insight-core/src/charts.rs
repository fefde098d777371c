//! Chart widget lifecycle.
//!
//! [`ChartManager`] owns one slot table. Rendering into a slot always
//! releases the slot's live widget before the backend constructs the
//! replacement, so two widgets never compete for the same surface.

use crate::target::RenderTarget;
use insight_common::chart::render_svg;
use insight_common::{ChartSlot, ChartSpec};
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, trace};

/// Chart construction errors.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The backend has no surface bound to the slot.
    #[error("no rendering surface bound to chart slot '{0}'")]
    NoSurface(ChartSlot),

    /// The backend failed to build the widget.
    #[error("failed to construct {slot} chart: {reason}")]
    Construction { slot: ChartSlot, reason: String },
}

/// A live chart widget.
pub trait ChartWidget {
    /// The spec the widget was built from.
    fn spec(&self) -> &ChartSpec;

    /// Free the widget's rendering resources. Called exactly once.
    fn release(&mut self);
}

/// Builds chart widgets bound to a slot's surface.
pub trait ChartBackend {
    type Widget: ChartWidget;

    fn construct(&mut self, slot: ChartSlot, spec: &ChartSpec)
        -> Result<Self::Widget, ChartError>;
}

/// Slot table of live chart widgets.
pub struct ChartManager<B: ChartBackend> {
    backend: B,
    slots: BTreeMap<ChartSlot, B::Widget>,
}

impl<B: ChartBackend> ChartManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slots: BTreeMap::new(),
        }
    }

    /// Create or replace the widget in `slot`.
    ///
    /// The previous widget is released first. A spec without data points
    /// still gets a widget, so the surface never keeps stale data. If
    /// construction fails the slot is left empty.
    pub fn render(&mut self, slot: ChartSlot, spec: ChartSpec) -> Result<(), ChartError> {
        if let Some(mut old) = self.slots.remove(&slot) {
            old.release();
            trace!(slot = %slot, "Released chart widget");
        }
        let widget = self.backend.construct(slot, &spec)?;
        debug!(slot = %slot, points = spec.values.len(), "Chart rendered");
        self.slots.insert(slot, widget);
        Ok(())
    }

    /// The live widget in `slot`, if any.
    pub fn live(&self, slot: ChartSlot) -> Option<&B::Widget> {
        self.slots.get(&slot)
    }

    /// Number of live widgets across all slots.
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    /// Release every live widget.
    pub fn release_all(&mut self) {
        for (slot, mut widget) in std::mem::take(&mut self.slots) {
            widget.release();
            trace!(slot = %slot, "Released chart widget");
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartManager<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Backend drawing each chart as inline SVG into the slot's target.
pub struct SvgChartBackend {
    surfaces: BTreeMap<ChartSlot, Rc<dyn RenderTarget>>,
    width: u32,
    height: u32,
}

impl SvgChartBackend {
    pub fn new() -> Self {
        Self {
            surfaces: BTreeMap::new(),
            width: 640,
            height: 320,
        }
    }

    /// Bind a slot to the target its widgets draw into.
    pub fn with_surface(mut self, slot: ChartSlot, target: Rc<dyn RenderTarget>) -> Self {
        self.surfaces.insert(slot, target);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for SvgChartBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartBackend for SvgChartBackend {
    type Widget = SvgChartWidget;

    fn construct(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<SvgChartWidget, ChartError> {
        let surface = self
            .surfaces
            .get(&slot)
            .cloned()
            .ok_or(ChartError::NoSurface(slot))?;
        surface.replace(render_svg(spec, self.width, self.height));
        Ok(SvgChartWidget {
            spec: spec.clone(),
            surface,
            released: false,
        })
    }
}

/// SVG chart drawn into a render target.
pub struct SvgChartWidget {
    spec: ChartSpec,
    surface: Rc<dyn RenderTarget>,
    released: bool,
}

impl SvgChartWidget {
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl ChartWidget for SvgChartWidget {
    fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    fn release(&mut self) {
        if !self.released {
            self.surface.clear();
            self.released = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Region;
    use insight_common::demo::sample_result;
    use std::cell::RefCell;

    /// Backend recording construct/release order.
    #[derive(Default)]
    struct RecordingBackend {
        events: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    struct RecordingWidget {
        slot: ChartSlot,
        spec: ChartSpec,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ChartWidget for RecordingWidget {
        fn spec(&self) -> &ChartSpec {
            &self.spec
        }

        fn release(&mut self) {
            self.events
                .borrow_mut()
                .push(format!("release {}", self.slot));
        }
    }

    impl ChartBackend for RecordingBackend {
        type Widget = RecordingWidget;

        fn construct(
            &mut self,
            slot: ChartSlot,
            spec: &ChartSpec,
        ) -> Result<RecordingWidget, ChartError> {
            if self.fail {
                return Err(ChartError::Construction {
                    slot,
                    reason: "surface lost".into(),
                });
            }
            self.events.borrow_mut().push(format!("construct {}", slot));
            Ok(RecordingWidget {
                slot,
                spec: spec.clone(),
                events: self.events.clone(),
            })
        }
    }

    fn live_widgets(events: &[String], slot: ChartSlot) -> i64 {
        let constructed = events
            .iter()
            .filter(|e| **e == format!("construct {}", slot))
            .count() as i64;
        let released = events
            .iter()
            .filter(|e| **e == format!("release {}", slot))
            .count() as i64;
        constructed - released
    }

    #[test]
    fn test_release_happens_before_construct() {
        let backend = RecordingBackend::default();
        let events = backend.events.clone();
        let mut manager = ChartManager::new(backend);
        let result = sample_result();

        manager
            .render(ChartSlot::Bar, ChartSpec::column_means(&result.statistics))
            .unwrap();
        manager
            .render(ChartSlot::Bar, ChartSpec::column_means(&result.statistics))
            .unwrap();

        assert_eq!(
            *events.borrow(),
            vec!["construct bar", "release bar", "construct bar"]
        );
        assert_eq!(live_widgets(&events.borrow(), ChartSlot::Bar), 1);
        assert_eq!(manager.live_count(), 1);
    }

    #[test]
    fn test_second_run_replaces_bar_widget() {
        let backend = RecordingBackend::default();
        let events = backend.events.clone();
        let mut manager = ChartManager::new(backend);

        let first = sample_result();
        let mut second = sample_result();
        second.statistics.shift_remove("Growth");

        manager
            .render(ChartSlot::Bar, ChartSpec::column_means(&first.statistics))
            .unwrap();
        manager
            .render(ChartSlot::Bar, ChartSpec::column_means(&second.statistics))
            .unwrap();

        assert_eq!(live_widgets(&events.borrow(), ChartSlot::Bar), 1);
        let live = manager.live(ChartSlot::Bar).unwrap();
        assert_eq!(live.spec().labels, vec!["Sales", "Customers", "Satisfaction"]);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut manager = ChartManager::new(RecordingBackend::default());
        let result = sample_result();
        manager
            .render(ChartSlot::Bar, ChartSpec::column_means(&result.statistics))
            .unwrap();
        manager
            .render(ChartSlot::Line, ChartSpec::forecast(&result.predictions))
            .unwrap();
        assert_eq!(manager.live_count(), 2);
        assert_eq!(
            manager.live(ChartSlot::Line).unwrap().spec().labels.len(),
            10
        );
    }

    #[test]
    fn test_empty_spec_still_constructs() {
        let mut manager = ChartManager::new(RecordingBackend::default());
        let mut predictions = sample_result().predictions;
        predictions.future_predictions.clear();
        manager
            .render(ChartSlot::Line, ChartSpec::forecast(&predictions))
            .unwrap();
        assert!(manager.live(ChartSlot::Line).unwrap().spec().is_empty());
    }

    #[test]
    fn test_failed_construction_leaves_slot_empty() {
        let backend = RecordingBackend::default();
        let events = backend.events.clone();
        let mut manager = ChartManager::new(backend);
        let spec = ChartSpec::forecast(&sample_result().predictions);
        manager.render(ChartSlot::Line, spec.clone()).unwrap();

        manager.backend.fail = true;
        assert!(manager.render(ChartSlot::Line, spec).is_err());
        assert!(manager.live(ChartSlot::Line).is_none());
        assert_eq!(live_widgets(&events.borrow(), ChartSlot::Line), 0);
    }

    #[test]
    fn test_drop_releases_everything() {
        let backend = RecordingBackend::default();
        let events = backend.events.clone();
        {
            let mut manager = ChartManager::new(backend);
            let result = sample_result();
            manager
                .render(ChartSlot::Bar, ChartSpec::column_means(&result.statistics))
                .unwrap();
            manager
                .render(ChartSlot::Line, ChartSpec::forecast(&result.predictions))
                .unwrap();
        }
        assert_eq!(live_widgets(&events.borrow(), ChartSlot::Bar), 0);
        assert_eq!(live_widgets(&events.borrow(), ChartSlot::Line), 0);
    }

    #[test]
    fn test_svg_backend_draws_into_surface() {
        let surface = Region::new("line-chart");
        let backend =
            SvgChartBackend::new().with_surface(ChartSlot::Line, Rc::new(surface.clone()));
        let mut manager = ChartManager::new(backend);
        manager
            .render(
                ChartSlot::Line,
                ChartSpec::forecast(&sample_result().predictions),
            )
            .unwrap();
        let svg = surface.markup().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Future Trend Forecast"));

        manager.release_all();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_svg_backend_size() {
        let surface = Region::new("bar-chart");
        let backend = SvgChartBackend::new()
            .with_size(300, 150)
            .with_surface(ChartSlot::Bar, Rc::new(surface.clone()));
        let mut manager = ChartManager::new(backend);
        manager
            .render(
                ChartSlot::Bar,
                ChartSpec::column_means(&sample_result().statistics),
            )
            .unwrap();
        let svg = surface.markup().unwrap();
        assert!(svg.contains(r#"width="300" height="150""#));
    }

    #[test]
    fn test_svg_backend_requires_surface() {
        let mut manager = ChartManager::new(SvgChartBackend::new());
        let err = manager
            .render(
                ChartSlot::Bar,
                ChartSpec::column_means(&sample_result().statistics),
            )
            .unwrap_err();
        assert!(matches!(err, ChartError::NoSurface(ChartSlot::Bar)));
    }
}
