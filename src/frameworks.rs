//! Canonical Apple framework names and their common spellings.
//!
//! User input such as `swift-ui`, `coredata` or `Core_ML` is mapped to the name Apple uses in
//! its documentation. Unknown names pass through with their first letter capitalized.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::DocError;

/// Canonical framework names with every lowercase spelling that maps to them.
#[rustfmt::skip]
static FRAMEWORK_NAMES: &[(&str, &[&str])] = &[
	("SwiftUI", &["swiftui", "swift-ui", "swift_ui"]),
	("UIKit", &["uikit", "ui-kit", "ui_kit"]),
	("AppKit", &["appkit", "app-kit", "app_kit"]),
	("WidgetKit", &["widgetkit", "widget-kit", "widget_kit"]),
	("WatchKit", &["watchkit", "watch-kit", "watch_kit"]),
	("TVUIKit", &["tvuikit", "tv-ui-kit", "tv_ui_kit"]),
	("Foundation", &["foundation"]),
	("Combine", &["combine"]),
	("Swift", &["swift", "swiftlang"]),
	("Objective-C", &["objective-c", "objc", "objectivec"]),
	("Cocoa", &["cocoa"]),
	("Cocoa Touch", &["cocoatouch", "cocoa-touch", "cocoa_touch"]),
	("Core Data", &["coredata", "core-data", "core_data"]),
	("CloudKit", &["cloudkit", "cloud-kit", "cloud_kit"]),
	("UserDefaults", &["userdefaults", "user-defaults", "user_defaults"]),
	("Keychain Services", &["keychain", "keychainservices", "keychain-services", "keychain_services"]),
	("SQLite", &["sqlite", "fmdb"]),
	("ARKit", &["arkit", "ar-kit", "ar_kit"]),
	("RealityKit", &["realitykit", "reality-kit", "reality_kit"]),
	("SceneKit", &["scenekit", "scene-kit", "scene_kit"]),
	("SpriteKit", &["spritekit", "sprite-kit", "sprite_kit"]),
	("GameKit", &["gamekit", "game-kit", "game_kit"]),
	("GameplayKit", &["gameplaykit", "gameplay-kit", "gameplay_kit"]),
	("Game Center", &["gamecenter", "game-center", "game_center"]),
	("Metal", &["metal"]),
	("MetalKit", &["metalkit", "metal-kit", "metal_kit"]),
	("Metal Performance Shaders", &["metalperformanceshaders", "metal-performance-shaders", "metal_performance_shaders", "mps"]),
	("Core Graphics", &["coregraphics", "core-graphics", "core_graphics", "cg"]),
	("Core Image", &["coreimage", "core-image", "core_image", "ci"]),
	("Core Animation", &["coreanimation", "core-animation", "core_animation", "quartzcore", "quartz-core", "quartz_core"]),
	("Vision", &["vision"]),
	("VisionKit", &["visionkit", "vision-kit", "vision_kit"]),
	("Image I/O", &["imageio", "image-io", "image_io"]),
	("AVFoundation", &["avfoundation", "av-foundation", "av_foundation"]),
	("AVKit", &["avkit", "av-kit", "av_kit"]),
	("Core Audio", &["coreaudio", "core-audio", "core_audio"]),
	("Core MIDI", &["coremidi", "core-midi", "core_midi"]),
	("Audio Toolbox", &["audiotoolbox", "audio-toolbox", "audio_toolbox"]),
	("AudioUnit", &["audiounit", "audio-unit", "audio_unit"]),
	("MusicKit", &["musickit", "music-kit", "music_kit"]),
	("Media Player", &["mediaplayer", "media-player", "media_player"]),
	("PhotoKit", &["photokit", "photo-kit", "photo_kit", "photos"]),
	("PhotosUI", &["photosui", "photos-ui", "photos_ui"]),
	("StoreKit", &["storekit", "store-kit", "store_kit", "storekit2", "store-kit-2", "store_kit_2"]),
	("HealthKit", &["healthkit", "health-kit", "health_kit"]),
	("HomeKit", &["homekit", "home-kit", "home_kit"]),
	("MapKit", &["mapkit", "map-kit", "map_kit"]),
	("Core Location", &["corelocation", "core-location", "core_location"]),
	("PushKit", &["pushkit", "push-kit", "push_kit"]),
	("User Notifications", &["usernotifications", "user-notifications", "user_notifications"]),
	("Notification Center", &["notificationcenter", "notification-center", "notification_center"]),
	("EventKit", &["eventkit", "event-kit", "event_kit"]),
	("EventKitUI", &["eventkitui", "event-kit-ui", "event_kit_ui"]),
	("Contacts", &["contacts"]),
	("ContactsUI", &["contactsui", "contacts-ui", "contacts_ui"]),
	("MessageUI", &["messageui", "message-ui", "message_ui"]),
	("Messages", &["messages"]),
	("CallKit", &["callkit", "call-kit", "call_kit"]),
	("AlarmKit", &["alarmkit", "alarm-kit", "alarm_kit"]),
	("Core ML", &["coreml", "core-ml", "core_ml"]),
	("Create ML", &["createml", "create-ml", "create_ml"]),
	("Natural Language", &["naturallanguage", "natural-language", "natural_language", "nlp"]),
	("Speech", &["speech", "speechframework", "speech-framework", "speech_framework"]),
	("Sound Analysis", &["soundanalysis", "sound-analysis", "sound_analysis"]),
	("Network", &["network"]),
	("Network Extension", &["networkextension", "network-extension", "network_extension"]),
	("URLSession", &["nsurlsession", "urlsession", "url-session", "url_session"]),
	("CFNetwork", &["cfnetwork", "cf-network", "cf_network"]),
	("Bonjour", &["bonjour", "netservice", "net-service", "net_service"]),
	("Security", &["security"]),
	("Local Authentication", &["localauthentication", "local-authentication", "local_authentication", "biometrics", "touchid", "touch-id", "touch_id", "faceid", "face-id", "face_id"]),
	("CryptoKit", &["cryptokit", "crypto-kit", "crypto_kit"]),
	("App Tracking Transparency", &["apptrackingtransparency", "app-tracking-transparency", "app_tracking_transparency", "att"]),
	("Core Bluetooth", &["corebluetooth", "core-bluetooth", "core_bluetooth", "bluetooth", "ble"]),
	("Core Motion", &["coremotion", "core-motion", "core_motion", "motion", "accelerometer", "gyroscope", "magnetometer", "devicemotion", "device-motion", "device_motion"]),
	("Core NFC", &["corenfc", "core-nfc", "core_nfc", "nfc"]),
	("Core WLAN", &["corewlan", "core-wlan", "core_wlan", "wifi", "wlan"]),
	("XCTest", &["xctest", "xc-test", "xc_test", "testing", "unittest", "unit-test", "unit_test"]),
	("Xcode", &["xcode"]),
	("Instruments", &["instruments"]),
	("Simulator", &["simulator"]),
	("Swift Playgrounds", &["playgrounds", "swift-playgrounds", "swift_playgrounds", "swift playgrounds"]),
	("Watch Connectivity", &["watchconnectivity", "watch-connectivity", "watch_connectivity"]),
	("ClockKit", &["clockkit", "clock-kit", "clock_kit", "complications"]),
	("TVServices", &["tvservices", "tv-services", "tv_services"]),
	("TVMLKit", &["tvmlkit", "tvml-kit", "tvml_kit", "tvml"]),
	("App Store Connect API", &["appstoreconnectapi", "app-store-connect-api", "app_store_connect_api"]),
	("Automator", &["automator"]),
	("AppleScript", &["applescript", "apple-script", "apple_script", "osascript"]),
	("Scripting Bridge", &["scriptingbridge", "scripting-bridge", "scripting_bridge"]),
	("Collaboration", &["collaboration"]),
	("Disc Recording", &["discrecording", "disc-recording", "disc_recording"]),
	("DVD Playback", &["dvdplayback", "dvd-playback", "dvd_playback"]),
	("FinderSync", &["findersync", "finder-sync", "finder_sync"]),
	("ImageKit", &["imagekit", "image-kit", "image_kit"]),
	("Input Method Kit", &["inputmethodkit", "input-method-kit", "input_method_kit"]),
	("Instant Message", &["instantmessage", "instant-message", "instant_message"]),
	("Latent Semantic Mapping", &["latentsemanticmapping", "latent-semantic-mapping", "latent_semantic_mapping", "lsm"]),
	("PubSub", &["pubsub", "pub-sub", "pub_sub"]),
	("Quartz", &["quartz"]),
	("Quartz Filters", &["quartzfilters", "quartz-filters", "quartz_filters"]),
	("Quartz Composer", &["quartzcomposer", "quartz-composer", "quartz_composer"]),
	("Quick Look", &["quicklook", "quick-look", "quick_look", "ql"]),
	("Screen Saver", &["screensaver", "screen-saver", "screen_saver"]),
	("SearchKit", &["searchkit", "search-kit", "search_kit"]),
	("Service Management", &["servicemanagemnt", "service-management", "service_management"]),
	("Sync Services", &["syncservices", "sync-services", "sync_services"]),
	("System Configuration", &["systemconfiguration", "system-configuration", "system_configuration"]),
	("System Extensions", &["systemextensions", "system-extensions", "system_extensions"]),
	("WebKit", &["webkit", "web-kit", "web_kit", "webkit2", "web-kit-2", "web_kit_2"]),
];

/// Curated alias lists reported for the most common frameworks.
#[rustfmt::skip]
static FRAMEWORK_ALIASES: &[(&str, &[&str])] = &[
	("SwiftUI", &["swiftui", "swift-ui", "swift_ui"]),
	("UIKit", &["uikit", "ui-kit", "ui_kit"]),
	("AppKit", &["appkit", "app-kit", "app_kit"]),
	("Core Data", &["coredata", "core-data", "core_data"]),
	("CloudKit", &["cloudkit", "cloud-kit", "cloud_kit"]),
	("Core Graphics", &["coregraphics", "core-graphics", "core_graphics", "cg"]),
	("Core Image", &["coreimage", "core-image", "core_image", "ci"]),
	("Core Animation", &["coreanimation", "core-animation", "core_animation", "quartzcore"]),
	("AVFoundation", &["avfoundation", "av-foundation", "av_foundation"]),
	("Metal", &["metal"]),
	("Vision", &["vision"]),
	("Core ML", &["coreml", "core-ml", "core_ml"]),
	("ARKit", &["arkit", "ar-kit", "ar_kit"]),
	("RealityKit", &["realitykit", "reality-kit", "reality_kit"]),
	("SceneKit", &["scenekit", "scene-kit", "scene_kit"]),
	("SpriteKit", &["spritekit", "sprite-kit", "sprite_kit"]),
	("GameKit", &["gamekit", "game-kit", "game_kit"]),
	("HealthKit", &["healthkit", "health-kit", "health_kit"]),
	("HomeKit", &["homekit", "home-kit", "home_kit"]),
	("MapKit", &["mapkit", "map-kit", "map_kit"]),
	("StoreKit", &["storekit", "store-kit", "store_kit"]),
	("AlarmKit", &["alarmkit", "alarm-kit", "alarm_kit"]),
	("WebKit", &["webkit", "web-kit", "web_kit"]),
];

/// Lowercase spelling to canonical name.
static LOOKUP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
	FRAMEWORK_NAMES
		.iter()
		.flat_map(|(canonical, spellings)| spellings.iter().map(move |spelling| (*spelling, *canonical)))
		.collect()
});

/// Broad grouping used when browsing frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrameworkCategory {
	/// User interface frameworks.
	#[serde(rename = "UI")]
	Ui,
	/// Drawing, imaging and GPU frameworks.
	Graphics,
	/// Games, AR and 3D.
	Games,
	/// Audio, video and photos.
	Media,
	/// Persistence and sync.
	Data,
	/// Machine learning and perception.
	#[serde(rename = "ML")]
	Ml,
	/// App services backed by system databases or stores.
	Services,
	/// Hardware and sensors.
	System,
	/// Language and base libraries.
	Foundation,
}

impl FrameworkCategory {
	/// Every category, in display order.
	pub const ALL: [FrameworkCategory; 9] = [
		Self::Ui,
		Self::Graphics,
		Self::Games,
		Self::Media,
		Self::Data,
		Self::Ml,
		Self::Services,
		Self::System,
		Self::Foundation,
	];

	/// Display name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ui => "UI",
			Self::Graphics => "Graphics",
			Self::Games => "Games",
			Self::Media => "Media",
			Self::Data => "Data",
			Self::Ml => "ML",
			Self::Services => "Services",
			Self::System => "System",
			Self::Foundation => "Foundation",
		}
	}

	/// Frameworks listed under this category.
	pub fn frameworks(self) -> &'static [&'static str] {
		match self {
			Self::Ui => &["SwiftUI", "UIKit", "AppKit", "WidgetKit", "WatchKit"],
			Self::Graphics => &["Core Graphics", "Core Image", "Core Animation", "Metal"],
			Self::Games => &["ARKit", "RealityKit", "SceneKit", "SpriteKit", "GameKit"],
			Self::Media => &["AVFoundation", "Core Audio", "PhotoKit", "MusicKit"],
			Self::Data => &["Core Data", "CloudKit", "UserDefaults", "Keychain Services"],
			Self::Ml => &["Core ML", "Create ML", "Natural Language", "Vision", "Speech"],
			Self::Services => &["HealthKit", "HomeKit", "MapKit", "StoreKit", "AlarmKit"],
			Self::System => &["Core Bluetooth", "Core Motion", "Core Location"],
			Self::Foundation => &["Foundation", "Combine", "Swift"],
		}
	}
}

impl fmt::Display for FrameworkCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FrameworkCategory {
	type Err = DocError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim();
		Self::ALL
			.into_iter()
			.find(|category| category.as_str().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| DocError::invalid(format!("Unknown framework category: {wanted}")))
	}
}

/// Everything known about a framework name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkInfo {
	/// Canonical spelling.
	pub canonical: String,
	/// Curated aliases; empty for frameworks without a list.
	pub aliases: Vec<String>,
	/// Category, when the framework is listed in one.
	pub category: Option<FrameworkCategory>,
	/// Whether the name maps to a known framework.
	pub is_valid: bool,
}

fn canonical_match(lowered: &str) -> Option<&'static str> {
	if let Some(canonical) = LOOKUP.get(lowered).copied() {
		return Some(canonical);
	}
	FRAMEWORK_NAMES
		.iter()
		.map(|(canonical, _)| *canonical)
		.find(|canonical| canonical.to_lowercase() == lowered)
}

/// Normalize a framework name to its canonical form.
///
/// Blank input yields an empty string.
pub fn normalize_framework_name(name: &str) -> String {
	let trimmed = name.trim();
	if trimmed.is_empty() {
		return String::new();
	}

	if let Some(canonical) = canonical_match(&trimmed.to_lowercase()) {
		return canonical.to_string();
	}

	let mut chars = trimmed.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Curated aliases for the framework `name` normalizes to.
pub fn framework_aliases(name: &str) -> Vec<&'static str> {
	let canonical = normalize_framework_name(name);
	FRAMEWORK_ALIASES
		.iter()
		.find(|(listed, _)| *listed == canonical)
		.map(|(_, aliases)| aliases.to_vec())
		.unwrap_or_default()
}

/// Whether `name` maps to a known framework.
pub fn is_valid_framework(name: &str) -> bool {
	let lowered = name.trim().to_lowercase();
	!lowered.is_empty() && canonical_match(&lowered).is_some()
}

/// Frameworks listed under `category`.
pub fn frameworks_by_category(category: FrameworkCategory) -> Vec<&'static str> {
	category.frameworks().to_vec()
}

/// Category of the framework `name` normalizes to.
pub fn framework_category(name: &str) -> Option<FrameworkCategory> {
	let canonical = normalize_framework_name(name);
	FrameworkCategory::ALL
		.into_iter()
		.find(|category| category.frameworks().iter().any(|listed| *listed == canonical))
}

/// Canonical names whose spelling or any alias contains `query`, sorted and deduplicated.
pub fn search_frameworks(query: &str) -> Vec<&'static str> {
	if query.is_empty() {
		return Vec::new();
	}

	let term = query.trim().to_lowercase();
	let mut matches = BTreeSet::new();
	for (canonical, spellings) in FRAMEWORK_NAMES {
		if canonical.to_lowercase().contains(&term)
			|| spellings.iter().any(|spelling| spelling.contains(&term))
		{
			matches.insert(*canonical);
		}
	}
	matches.into_iter().collect()
}

/// Collect canonical name, aliases, category and validity for `name`.
pub fn framework_info(name: &str) -> FrameworkInfo {
	let canonical = normalize_framework_name(name);
	FrameworkInfo {
		aliases: framework_aliases(&canonical)
			.into_iter()
			.map(str::to_string)
			.collect(),
		category: framework_category(&canonical),
		is_valid: is_valid_framework(name),
		canonical,
	}
}

/// Every canonical framework name, sorted.
pub fn all_frameworks() -> Vec<&'static str> {
	let names: BTreeSet<&'static str> = FRAMEWORK_NAMES
		.iter()
		.map(|(canonical, _)| *canonical)
		.collect();
	names.into_iter().collect()
}
