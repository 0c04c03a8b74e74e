//! Scenes domain: markers for scene furniture.

use bevy::prelude::*;

/// Designated placement point for the player after a scene load.
#[derive(Component, Debug)]
pub struct SpawnMarker;

/// The travel car.
#[derive(Component, Debug)]
pub struct Car;

/// The vending machine in the home scene.
#[derive(Component, Debug)]
pub struct VendingMachine;

/// The tackle shop counter in the home scene.
#[derive(Component, Debug)]
pub struct TackleShop;

/// Static scenery with collision (walls, water edge).
#[derive(Component, Debug)]
pub struct Scenery;
