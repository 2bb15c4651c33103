pub mod city_repository;
