//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::{Vec2, Vec3};

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind Szenenkoordinaten (die Screen→Szene-Transformation
/// macht der Host); sie werden erst in den Handlern in die z = 0-Ebene gehoben.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste gedrückt (Klick, kein Drag seit dem letzten Event)
    PointerPressed { world_pos: Vec2 },
    /// Primärtaste losgelassen (ohne Drag seit dem letzten Event)
    PointerReleased { world_pos: Vec2 },
    /// Zeiger bewegt mit gehaltener Taste
    PointerDragged { world_pos: Vec2 },
    /// Zeiger bewegt ohne gehaltene Taste
    PointerMoved { world_pos: Vec2 },
    /// Kurven-Kanal: Taste gedrückt (Steuerpunkt greifen)
    CurvePointerPressed { world_pos: Vec2 },
    /// Kurven-Kanal: Taste losgelassen (Steuerpunkt ablegen)
    CurvePointerReleased { world_pos: Vec2 },
    /// Selektierte Sphäre löschen
    DeleteSelectedRequested,
    /// Palettenfarbe für die nächste neue Sphäre wählen
    PaletteColorSelected { name: String },
    /// Spiegel-Modus umschalten (true = Kurvenspiegel)
    MirrorModeChanged { curved: bool },
    /// Punktlicht um Delta verschieben
    LightMoveRequested { delta: Vec3 },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Sphäre am Klickpunkt selektieren oder neu anlegen
    SelectOrCreateSphere { world_pos: Vec2 },
    /// Selektierte Sphäre am Punkt ablegen (geklemmt) und Selektion aufheben
    PlaceSelectedSphere { world_pos: Vec2 },
    /// Selektion aufheben und in den Idle-Modus zurückkehren
    DeselectSphere,
    /// In den Repositionier-Modus wechseln (Sphäre folgt dem Zeiger)
    BeginSphereRepositioning,
    /// In den Resize-Modus wechseln, wenn der Drag weit genug vom Zentrum ist
    BeginResizeIfDragged { world_pos: Vec2 },
    /// Radius der selektierten Sphäre auf den Zeigerabstand setzen
    ResizeSelectedSphere { world_pos: Vec2 },
    /// Selektierte Sphäre dem Zeiger nachführen (geklemmt)
    MoveSelectedSphere { world_pos: Vec2 },
    /// Nächstgelegenen Steuerpunkt greifen und zum Zeiger ziehen
    GrabControlPoint { world_pos: Vec2 },
    /// Gegriffenen Steuerpunkt zum Zeiger ziehen
    DragControlPoint { world_pos: Vec2 },
    /// Steuerpunkt am Zeiger ablegen und Session beenden
    ReleaseControlPoint { world_pos: Vec2 },
    /// Selektierte Sphäre aus der Registry entfernen
    DeleteSelectedSphere,
    /// Farbe für die nächste neue Sphäre setzen
    SetNextColor { name: String },
    /// Spiegel-Modus setzen
    SetMirrorMode { curved: bool },
    /// Punktlicht verschieben (achsenweise begrenzt)
    MoveLight { delta: Vec3 },
}

/// Tastatur-Befehle des Hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    /// Selektierte Sphäre löschen
    DeleteSelection,
    /// Punktlicht einen Schritt in Richtung bewegen
    /// (Schrittweite kommt aus den Optionen)
    MoveLight { direction: Vec3 },
}
