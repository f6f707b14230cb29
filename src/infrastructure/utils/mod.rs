pub mod object_name;
