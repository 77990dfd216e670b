use leptos::prelude::*;

use pinmap_shared::{Marker, MarkerStats};

const WIDGET_STYLE: &str = "
.marker-info {
    position: fixed;
    top: 20px;
    right: 20px;
    z-index: 1000;
    font-family: 'PingFang SC', 'Microsoft YaHei', sans-serif;
}

.marker-info .info-container {
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(10px);
    -webkit-backdrop-filter: blur(10px);
    border-radius: 15px;
    padding: 20px;
    box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
    border: 1px solid rgba(255, 255, 255, 0.18);
    min-width: 250px;
    color: #333;
}

.marker-info .stats {
    margin-bottom: 15px;
    padding-bottom: 15px;
    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
}

.marker-info h3 {
    margin: 0 0 10px 0;
    font-size: 16px;
    color: #1a73e8;
}

.marker-info p {
    margin: 5px 0;
    font-size: 14px;
    line-height: 1.4;
}

.marker-info .coordinates {
    color: #666;
    font-size: 13px;
    margin-top: 8px;
}

.marker-info .image-count {
    color: #1a73e8;
    font-weight: 500;
}

@media (max-width: 768px) {
    .marker-info {
        top: 10px;
        right: 10px;
    }

    .marker-info .info-container {
        padding: 15px;
        min-width: 200px;
    }
}
";

/// View-state behind the widget. Plain data so the update semantics stay
/// testable without a DOM; the component mirrors it through one signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    markers: Vec<Marker>,
    current: Option<Marker>,
    detail: Option<Marker>,
}

impl ViewState {
    /// Replace the marker snapshot; stats re-derive from it.
    pub fn update_stats(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    /// Replace the selection. Deselection hides the panel but keeps the last
    /// rendered detail; only visibility toggles.
    pub fn update_current_marker(&mut self, marker: Option<Marker>) {
        if let Some(m) = &marker {
            self.detail = Some(m.clone());
        }
        self.current = marker;
    }

    pub fn stats(&self) -> MarkerStats {
        MarkerStats::from_markers(&self.markers)
    }

    pub fn panel_visible(&self) -> bool {
        self.current.is_some()
    }

    /// The marker whose data the detail panel holds, selected or not.
    pub fn detail(&self) -> Option<&Marker> {
        self.detail.as_ref()
    }
}

/// Widget state handle, provided via context so both the host shell and the
/// JS bridge can push updates without going through the component tree.
#[derive(Clone, Copy)]
pub struct MarkerInfoState {
    view: RwSignal<ViewState>,
}

impl MarkerInfoState {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::default()),
        }
    }

    pub fn update_stats(&self, markers: Vec<Marker>) {
        self.view.update(|view| view.update_stats(markers));
    }

    pub fn update_current_marker(&self, marker: Option<Marker>) {
        self.view.update(|view| view.update_current_marker(marker));
    }
}

fn description_text(marker: &Marker) -> String {
    if marker.has_description() {
        marker.description.clone()
    } else {
        "暂无描述".to_string()
    }
}

/// Latitude and longitude with exactly six decimal places each.
fn coordinate_line(marker: &Marker) -> String {
    format!("坐标：{:.6}, {:.6}", marker.latitude, marker.longitude)
}

fn image_count_line(marker: &Marker) -> String {
    format!("图片数量：{}", marker.image_count())
}

/// Fixed overlay card: always-visible stats block plus the current-marker
/// detail panel.
#[component]
pub fn MarkerInfo() -> impl IntoView {
    let MarkerInfoState { view } = expect_context();

    let stats = Memo::new(move |_| view.with(|v| v.stats()));
    let panel_visible = move || view.with(|v| v.panel_visible());
    let description = move || view.with(|v| v.detail().map(description_text).unwrap_or_default());
    let coordinates = move || view.with(|v| v.detail().map(coordinate_line).unwrap_or_default());
    let image_count = move || view.with(|v| v.detail().map(image_count_line).unwrap_or_default());

    view! {
        <style>{WIDGET_STYLE}</style>
        <div class="marker-info">
            <div class="info-container">
                <div class="stats">
                    <h3>"点位统计"</h3>
                    <p>"总点位数："<span>{move || stats.get().total_markers}</span></p>
                    <p>"总图片数："<span>{move || stats.get().total_images}</span></p>
                </div>
                <div
                    class="current-marker"
                    style:display=move || if panel_visible() { "block" } else { "none" }
                >
                    <h3>"当前点位"</h3>
                    <p class="description">{description}</p>
                    <p class="coordinates">{coordinates}</p>
                    <p class="image-count">{image_count}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewState, coordinate_line, description_text, image_count_line};
    use pinmap_shared::Marker;

    fn marker(lat: f64, lon: f64, description: &str, images: &[&str]) -> Marker {
        Marker {
            id: 1,
            latitude: lat,
            longitude: lon,
            value: 0.0,
            required_value: 0.0,
            description: description.to_string(),
            sufficient_color: "#409EFF".to_string(),
            insufficient_color: "#F56C6C".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn starts_hidden_with_zero_stats() {
        let view = ViewState::default();
        assert!(!view.panel_visible());
        assert!(view.detail().is_none());
        assert_eq!(view.stats().total_markers, 0);
        assert_eq!(view.stats().total_images, 0);
    }

    #[test]
    fn update_stats_replaces_the_snapshot() {
        let mut view = ViewState::default();
        view.update_stats(vec![marker(1.0, 2.0, "", &["a.jpg", "b.jpg"])]);
        assert_eq!(view.stats().total_markers, 1);
        assert_eq!(view.stats().total_images, 2);

        view.update_stats(vec![
            marker(1.0, 2.0, "", &[]),
            marker(3.0, 4.0, "", &["c.jpg"]),
        ]);
        assert_eq!(view.stats().total_markers, 2);
        assert_eq!(view.stats().total_images, 1);
    }

    #[test]
    fn update_stats_is_idempotent() {
        let markers = vec![marker(1.0, 2.0, "x", &["a.jpg"])];
        let mut once = ViewState::default();
        once.update_stats(markers.clone());
        let mut twice = ViewState::default();
        twice.update_stats(markers.clone());
        twice.update_stats(markers);
        assert_eq!(once, twice);
    }

    #[test]
    fn selection_shows_the_panel_with_that_marker() {
        let mut view = ViewState::default();
        let m = marker(39.9042, 116.407396, "老仓库", &["a.jpg"]);
        view.update_current_marker(Some(m.clone()));
        assert!(view.panel_visible());
        assert_eq!(view.detail(), Some(&m));
    }

    #[test]
    fn reselection_replaces_the_detail_wholesale() {
        let mut view = ViewState::default();
        let m1 = marker(1.0, 2.0, "first", &["a.jpg"]);
        let m2 = marker(3.0, 4.0, "", &[]);
        view.update_current_marker(Some(m1));
        view.update_current_marker(Some(m2.clone()));
        assert!(view.panel_visible());
        assert_eq!(view.detail(), Some(&m2));
    }

    #[test]
    fn deselection_hides_the_panel_and_keeps_stale_detail() {
        let mut view = ViewState::default();
        let m = marker(1.0, 2.0, "x", &[]);
        view.update_current_marker(Some(m.clone()));
        view.update_current_marker(None);
        assert!(!view.panel_visible());
        assert_eq!(view.detail(), Some(&m));

        // Deselecting again is a no-op.
        view.update_current_marker(None);
        assert!(!view.panel_visible());
    }

    #[test]
    fn update_current_marker_is_idempotent() {
        let m = marker(1.0, 2.0, "x", &["a.jpg"]);
        let mut once = ViewState::default();
        once.update_current_marker(Some(m.clone()));
        let mut twice = ViewState::default();
        twice.update_current_marker(Some(m.clone()));
        twice.update_current_marker(Some(m));
        assert_eq!(once, twice);
    }

    #[test]
    fn description_falls_back_when_empty() {
        assert_eq!(description_text(&marker(0.0, 0.0, "", &[])), "暂无描述");
        assert_eq!(description_text(&marker(0.0, 0.0, "老仓库", &[])), "老仓库");
    }

    #[test]
    fn coordinate_line_uses_six_decimal_places() {
        let m = marker(39.9042, 116.407396, "", &[]);
        assert_eq!(coordinate_line(&m), "坐标：39.904200, 116.407396");
    }

    #[test]
    fn image_count_line_counts_images() {
        assert_eq!(image_count_line(&marker(0.0, 0.0, "", &[])), "图片数量：0");
        assert_eq!(
            image_count_line(&marker(0.0, 0.0, "", &["a.jpg", "b.jpg"])),
            "图片数量：2"
        );
    }
}
